//! Product models exchanged with the catalog backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


/// Brands, categories, ingredients and providers all travel as `{id, name}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamedObject {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductObject {
    pub id: String,
    pub name: String,
    pub brand: NamedObject,
    pub small_image_url: String,
    pub provider: NamedObject,
    pub short_description: String,
    #[serde(default)]
    pub is_liked: Option<bool>,
    pub rating: f64,
}

impl ProductObject {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand.name, self.name)
    }
}

/// One page of a listing. Pages are indexed from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub products: Vec<ProductObject>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub id: String,
    pub name: String,
    pub large_image_url: String,
    pub provider: NamedObject,
    pub brand: NamedObject,
    pub long_description: String,
    pub volume: f64,
    pub ingredients: Vec<NamedObject>,
    #[serde(default)]
    pub is_liked: Option<bool>,
    pub rating: f64,
}

/// Body of the moderator "add product" request. Ids are numeric on this endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddProductPayload {
    pub name: String,
    pub small_image_url: String,
    pub large_image_url: String,
    pub provider: u64,
    pub brand: u64,
    pub categories: Vec<u64>,
    pub short_description: String,
    pub long_description: String,
    pub volume: String,
    pub ingredients: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericNamedObject {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductResponse {
    pub id: u64,
    pub name: String,
    pub small_image_url: String,
    pub large_image_url: String,
    pub provider: NumericNamedObject,
    pub brand: NumericNamedObject,
    pub categories: Vec<NumericNamedObject>,
    pub short_description: String,
    pub long_description: String,
    pub volume: String,
    pub ingredients: Vec<NumericNamedObject>,
    pub rating: f64,
    pub rating_sum: f64,
    #[serde(default)]
    pub liked_by: Vec<u64>,
    #[serde(default)]
    pub ratings: BTreeMap<String, f64>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_response_reads_backend_json() {
        let json = r#"{
            "products": [{
                "id": "17",
                "name": "Hydrating Toner",
                "brand": {"id": "3", "name": "Klairs"},
                "smallImageUrl": "https://img/17-s.png",
                "provider": {"id": "1", "name": "Rossmann"},
                "shortDescription": "Toner",
                "rating": 4.5
            }],
            "totalPages": 7
        }"#;
        let response: ProductResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_pages, 7);
        assert_eq!(response.products[0].is_liked, None);
        assert_eq!(response.products[0].display_name(), "Klairs Hydrating Toner");
    }

    #[test]
    fn add_product_payload_writes_camel_case() {
        let payload = AddProductPayload {
            name: "Serum".to_string(),
            small_image_url: "s".to_string(),
            provider: 2,
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["smallImageUrl"], "s");
        assert_eq!(value["provider"], 2);
        assert!(value.get("small_image_url").is_none());
    }
}
