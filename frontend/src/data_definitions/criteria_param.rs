//! Route query segment holding the product search criteria.

use std::fmt::Display;

use common::{
    criteria_url::{product_criteria_to_query, url_to_product_criteria},
    product_criteria::ProductCriteria,
};


/// Renders as the criteria query string and parses it back, so the listing
/// routes can be shared and restored from the browser history.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CriteriaParam(pub ProductCriteria);

impl From<ProductCriteria> for CriteriaParam {
    fn from(value: ProductCriteria) -> Self {
        CriteriaParam(value)
    }
}

impl Display for CriteriaParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", product_criteria_to_query(&self.0))
    }
}

// Query segments never fail to parse; unknown or broken parameters are dropped.
impl From<&str> for CriteriaParam {
    fn from(query: &str) -> Self {
        CriteriaParam(url_to_product_criteria(query))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_then_parse_keeps_criteria() {
        let criteria = ProductCriteria {
            categories_ids: Some(vec!["2".to_string()]),
            phrase: Some("night cream".to_string()),
            ..Default::default()
        };
        let shown = CriteriaParam::from(criteria.clone()).to_string();
        assert_eq!(shown, "categories=2&phrase=night%20cream");

        let parsed = CriteriaParam::from(shown.as_str()).0;
        assert_eq!(parsed.categories_ids, criteria.categories_ids);
        assert_eq!(parsed.phrase, criteria.phrase);
    }
}
