//! Product search, details and moderator endpoints.

use bytes::Bytes;
use common::{
    criteria_url::{RequestParam, product_criteria_to_url_builder, url_string_to_string},
    product::{AddProductPayload, AddProductResponse, ProductDetails, ProductResponse},
    product_criteria::ProductCriteria,
    product_listing::ProductRetrieval,
};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::http_utils::CatalogClient;


/// JSON body of the AI search. The query travels decoded, not URL-escaped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct AskAiBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    k_neighbours: Option<i32>,
}

impl AskAiBody {
    fn from_criteria(criteria: &ProductCriteria) -> Self {
        Self {
            query: criteria.query.as_deref().map(url_string_to_string),
            k_neighbours: criteria.k_neighbours,
        }
    }
}

/// An image picked for upload in the moderator panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub data: Bytes,
}

impl CatalogClient {
    pub fn search_products_url(&self, criteria: &ProductCriteria, page_index: u32) -> String {
        let mut builder = product_criteria_to_url_builder(&self.api_url("products/search"), criteria);
        builder.set_param(RequestParam::PageNumber.key(), page_index.to_string());
        builder.build()
    }

    pub fn ask_ai_url(&self, criteria: &ProductCriteria) -> String {
        product_criteria_to_url_builder(&self.api_url("products/AskAI"), criteria).build()
    }

    pub fn liked_products_url(&self, page_index: u32) -> String {
        let mut builder = common::criteria_url::QueryStringBuilder::new(self.api_url("products"));
        builder
            .set_param(RequestParam::PageNumber.key(), page_index.to_string())
            .set_param(RequestParam::Liked.key(), "true");
        builder.build()
    }

    pub async fn search_products(&self, criteria: &ProductCriteria, page_index: u32) -> anyhow::Result<ProductResponse> {
        let url = self.search_products_url(criteria, page_index);
        self.send_json(self.get(&url)).await
    }

    pub async fn search_products_by_ai(&self, criteria: &ProductCriteria) -> anyhow::Result<ProductResponse> {
        let url = self.ask_ai_url(criteria);
        let body = AskAiBody::from_criteria(criteria);
        self.send_json(self.post(&url).json(&body)).await
    }

    pub async fn get_product_details(&self, product_id: &str) -> anyhow::Result<ProductDetails> {
        let url = self.api_url(&format!("products/{product_id}"));
        self.send_json(self.get(&url)).await
    }

    pub async fn get_liked_products(&self, page_index: u32) -> anyhow::Result<ProductResponse> {
        let url = self.liked_products_url(page_index);
        self.send_json(self.get(&url)).await
    }

    pub async fn add_product(&self, payload: &AddProductPayload) -> anyhow::Result<AddProductResponse> {
        let url = self.api_url("products");
        self.send_json(self.post(&url).json(payload)).await
    }

    /// Uploads the small and/or large image of a product as multipart form fields.
    pub async fn upload_product_images(
        &self,
        product_id: &str,
        small_image: Option<ImageFile>,
        large_image: Option<ImageFile>,
    ) -> anyhow::Result<()> {
        let form = image_form(small_image, large_image);
        let url = self.api_url(&format!("products/{product_id}"));
        self.send(self.post(&url).multipart(form)).await?;
        Ok(())
    }
}

fn image_form(small_image: Option<ImageFile>, large_image: Option<ImageFile>) -> Form {
    let mut form = Form::new();
    for (field, image) in [("smallImg", small_image), ("bigImg", large_image)] {
        if let Some(image) = image {
            form = form.part(field, Part::bytes(image.data.to_vec()).file_name(image.file_name));
        }
    }
    form
}

impl ProductRetrieval for CatalogClient {
    async fn search_products(&self, criteria: &ProductCriteria, page_index: u32) -> anyhow::Result<ProductResponse> {
        CatalogClient::search_products(self, criteria, page_index).await
    }

    async fn search_products_by_ai(&self, criteria: &ProductCriteria) -> anyhow::Result<ProductResponse> {
        CatalogClient::search_products_by_ai(self, criteria).await
    }
}


#[cfg(test)]
mod tests {
    use common::product_criteria::{SortBy, SortOption, SortOrder};

    use super::*;
    use crate::config::ClientConfig;

    fn client() -> CatalogClient {
        CatalogClient::new(ClientConfig {
            api_url: "http://shop/api".to_string(),
            access_token: None,
        })
    }

    #[test]
    fn search_url_carries_criteria_and_page() {
        let criteria = ProductCriteria {
            brands_to_include_ids: Some(vec!["4".to_string(), "7".to_string()]),
            sorting_criteria: Some(vec![SortBy::new(SortOption::MatchScore, SortOrder::Descending)]),
            phrase: Some("face  mask".to_string()),
            ..Default::default()
        };
        assert_eq!(
            client().search_products_url(&criteria, 2),
            "http://shop/api/products/search?brands-include=4,7&phrase=face%20mask&sort-by=d-match-score&page-number=2"
        );
    }

    #[test]
    fn search_url_without_criteria_still_pages() {
        assert_eq!(
            client().search_products_url(&ProductCriteria::default(), 0),
            "http://shop/api/products/search?page-number=0"
        );
    }

    #[test]
    fn liked_url() {
        assert_eq!(client().liked_products_url(1), "http://shop/api/products?page-number=1&liked=true");
    }

    #[test]
    fn ai_request_sends_decoded_query_in_body() {
        let criteria = ProductCriteria::from_ai_query("cream for   dry skin", 10);
        assert_eq!(
            client().ask_ai_url(&criteria),
            "http://shop/api/products/AskAI?kNeighbours=10&query=cream%20for%20dry%20skin"
        );
        let body = serde_json::to_value(AskAiBody::from_criteria(&criteria)).unwrap();
        assert_eq!(body, serde_json::json!({"query": "cream for   dry skin", "kNeighbours": 10}));
    }

    #[test]
    fn ai_body_decodes_url_escaped_query() {
        let criteria = common::criteria_url::url_to_product_criteria("query=dry%20skin&kNeighbours=5");
        let body = serde_json::to_value(AskAiBody::from_criteria(&criteria)).unwrap();
        assert_eq!(body, serde_json::json!({"query": "dry skin", "kNeighbours": 5}));
    }

    #[test]
    fn ai_body_omits_missing_fields() {
        let body = serde_json::to_value(AskAiBody::from_criteria(&ProductCriteria::default())).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn image_form_only_has_given_parts() {
        let form = image_form(
            None,
            Some(ImageFile {
                file_name: "big.png".to_string(),
                data: Bytes::from_static(b"png"),
            }),
        );
        let request = client().post("http://shop/api/products/3").multipart(form).build().unwrap();
        let content_type = request.headers()[reqwest::header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data"));
    }
}
