//! Autocomplete and id lookups for the filter selectors.

use common::{
    criteria_url::{QueryStringBuilder, string_to_url_string},
    product::NamedObject,
};

use crate::http_utils::CatalogClient;


/// Catalog collections that are plain `{id, name}` lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKind {
    Brands,
    Categories,
    Ingredients,
    Providers,
}

impl NamedKind {
    pub fn path(&self) -> &'static str {
        match self {
            NamedKind::Brands => "brands",
            NamedKind::Categories => "categories",
            NamedKind::Ingredients => "ingredients",
            NamedKind::Providers => "providers",
        }
    }
}

impl CatalogClient {
    pub fn named_search_url(&self, kind: NamedKind, query: &str, count: u32, skip_allergens: bool) -> String {
        let mut builder = QueryStringBuilder::new(self.api_url(kind.path()));
        if kind == NamedKind::Ingredients {
            builder.set_param("skip-allergens", skip_allergens.to_string());
        }
        builder
            .set_param("count", count.to_string())
            .set_param("query", string_to_url_string(query));
        builder.build()
    }

    pub fn named_by_ids_url(&self, kind: NamedKind, ids: &[String]) -> String {
        let mut builder = QueryStringBuilder::new(self.api_url(&format!("{}/get-by", kind.path())));
        builder.set_param("ids", ids.join(","));
        builder.build()
    }

    /// Up to `count` entries whose name matches `query`.
    pub async fn search_named(&self, kind: NamedKind, query: &str, count: u32) -> anyhow::Result<Vec<NamedObject>> {
        let url = self.named_search_url(kind, query, count, false);
        self.send_json(self.get(&url)).await
    }

    pub async fn search_ingredients(&self, query: &str, count: u32, skip_allergens: bool) -> anyhow::Result<Vec<NamedObject>> {
        let url = self.named_search_url(NamedKind::Ingredients, query, count, skip_allergens);
        self.send_json(self.get(&url)).await
    }

    /// Resolves ids back to names, e.g. to label the selections restored from a URL.
    pub async fn get_named_by_ids(&self, kind: NamedKind, ids: &[String]) -> anyhow::Result<Vec<NamedObject>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let url = self.named_by_ids_url(kind, ids);
        self.send_json(self.get(&url)).await
    }
}
