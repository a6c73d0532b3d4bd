//! Moderator "add product" form and its conversion to the request body.

use common::product::{AddProductPayload, NamedObject};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub small_image_url: String,
    pub large_image_url: String,
    pub short_description: String,
    pub long_description: String,
    pub volume: String,
    pub provider: Option<NamedObject>,
    pub brand: Option<NamedObject>,
    pub categories: Vec<NamedObject>,
    pub ingredients: Vec<NamedObject>,
}

impl ProductForm {
    /// The endpoint takes numeric ids; name, provider and brand are required.
    pub fn to_payload(&self) -> Result<AddProductPayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Product name is required".to_string());
        }
        let provider = self.provider.as_ref().ok_or("Pick a provider")?;
        let brand = self.brand.as_ref().ok_or("Pick a brand")?;

        Ok(AddProductPayload {
            name: name.to_string(),
            small_image_url: self.small_image_url.trim().to_string(),
            large_image_url: self.large_image_url.trim().to_string(),
            provider: numeric_id(provider)?,
            brand: numeric_id(brand)?,
            categories: self.categories.iter().map(numeric_id).collect::<Result<_, _>>()?,
            short_description: self.short_description.trim().to_string(),
            long_description: self.long_description.trim().to_string(),
            volume: self.volume.trim().to_string(),
            ingredients: self.ingredients.iter().map(numeric_id).collect::<Result<_, _>>()?,
        })
    }
}

fn numeric_id(named: &NamedObject) -> Result<u64, String> {
    named
        .id
        .parse()
        .map_err(|_| format!("{} has a non-numeric id: {}", named.name, named.id))
}

/// Adds `picked` unless an entry with the same id is already there.
pub fn push_unique(list: &mut Vec<NamedObject>, picked: NamedObject) {
    if !list.iter().any(|n| n.id == picked.id) {
        list.push(picked);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: &str, name: &str) -> NamedObject {
        NamedObject {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "  Moisturizing Cream ".to_string(),
            volume: "400ml".to_string(),
            provider: Some(named("2", "Rossmann")),
            brand: Some(named("7", "Nivea")),
            categories: vec![named("3", "skin")],
            ingredients: vec![named("10", "aqua"), named("11", "glycerin")],
            ..Default::default()
        }
    }

    #[test]
    fn payload_carries_numeric_ids() {
        let payload = filled_form().to_payload().unwrap();
        assert_eq!(payload.name, "Moisturizing Cream");
        assert_eq!(payload.provider, 2);
        assert_eq!(payload.brand, 7);
        assert_eq!(payload.categories, vec![3]);
        assert_eq!(payload.ingredients, vec![10, 11]);
        assert_eq!(payload.volume, "400ml");
    }

    #[test]
    fn required_fields_are_checked() {
        let mut form = filled_form();
        form.brand = None;
        assert_eq!(form.to_payload(), Err("Pick a brand".to_string()));

        let mut form = filled_form();
        form.name = "   ".to_string();
        assert_eq!(form.to_payload(), Err("Product name is required".to_string()));
    }

    #[test]
    fn non_numeric_ids_are_rejected() {
        let mut form = filled_form();
        form.ingredients.push(named("x1", "mystery"));
        assert!(form.to_payload().unwrap_err().contains("mystery"));
    }

    #[test]
    fn push_unique_skips_known_ids() {
        let mut list = vec![named("1", "a")];
        push_unique(&mut list, named("1", "a"));
        push_unique(&mut list, named("2", "b"));
        assert_eq!(list.len(), 2);
    }
}
