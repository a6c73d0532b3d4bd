//! Mapping between [`ProductCriteria`] and the URL query string.
//!
//! The query string is shared through browser URLs and back/forward navigation,
//! and the same keys are understood by the catalog backend, so the parameter
//! names below must stay stable.
//!
//! Neither direction fails: absent or malformed parameters decode to absent
//! fields.

use std::collections::HashMap;

use crate::product_criteria::{ProductCriteria, SortBy};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestParam {
    PageNumber,
    IngredientsExclude,
    IngredientsInclude,
    BrandsExclude,
    BrandsInclude,
    Providers,
    Categories,
    MinRating,
    Phrase,
    SortBy,
    Liked,
    KNeighbours,
    Query,
}

impl RequestParam {
    pub fn key(&self) -> &'static str {
        match self {
            RequestParam::PageNumber => "page-number",
            RequestParam::IngredientsExclude => "ingredients-exclude",
            RequestParam::IngredientsInclude => "ingredients-include",
            RequestParam::BrandsExclude => "brands-exclude",
            RequestParam::BrandsInclude => "brands-include",
            RequestParam::Providers => "providers",
            RequestParam::Categories => "categories",
            RequestParam::MinRating => "min-rating",
            RequestParam::Phrase => "phrase",
            RequestParam::SortBy => "sort-by",
            RequestParam::Liked => "liked",
            RequestParam::KNeighbours => "kNeighbours",
            RequestParam::Query => "query",
        }
    }
}

/// Collects `key=value` pairs in insertion order. Values are written as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryStringBuilder {
    base: String,
    params: Vec<(String, String)>,
}

impl QueryStringBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            params: Vec::new(),
        }
    }

    /// Sets a parameter, replacing an earlier value for the same key in place.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    pub fn query(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn build(&self) -> String {
        if self.params.is_empty() {
            return self.base.clone();
        }
        format!("{}?{}", self.base, self.query())
    }
}

/// Trims the input and collapses inner whitespace runs into single spaces.
pub fn pretty_string(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`pretty_string`], then URL-escaped (spaces become `%20`).
pub fn string_to_url_string(input: &str) -> String {
    urlencoding::encode(&pretty_string(input)).into_owned()
}

pub fn url_string_to_string(input: &str) -> String {
    match urlencoding::decode(input) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => input.replace("%20", " "),
    }
}

/// Builds the criteria part of a URL on top of `base`.
pub fn product_criteria_to_url_builder(base: &str, criteria: &ProductCriteria) -> QueryStringBuilder {
    let mut builder = QueryStringBuilder::new(base);

    // Each id is escaped on its own so `,` stays the separator. Ids cannot contain commas.
    let mut set_ids = |param: RequestParam, values: &Option<Vec<String>>| {
        if let Some(values) = values {
            if !values.is_empty() {
                let escaped = values.iter().map(|id| urlencoding::encode(id)).collect::<Vec<_>>();
                builder.set_param(param.key(), escaped.join(","));
            }
        }
    };
    set_ids(RequestParam::IngredientsInclude, &criteria.ingredients_to_include_ids);
    set_ids(RequestParam::IngredientsExclude, &criteria.ingredients_to_exclude_ids);
    set_ids(RequestParam::BrandsInclude, &criteria.brands_to_include_ids);
    set_ids(RequestParam::BrandsExclude, &criteria.brands_to_exclude_ids);
    set_ids(RequestParam::Categories, &criteria.categories_ids);
    set_ids(RequestParam::Providers, &criteria.providers_ids);

    if let Some(phrase) = non_blank(&criteria.phrase) {
        builder.set_param(RequestParam::Phrase.key(), string_to_url_string(phrase));
    }

    // 0 is indistinguishable from unset here.
    if let Some(min_rating) = criteria.min_rating.filter(|r| *r != 0) {
        builder.set_param(RequestParam::MinRating.key(), min_rating.to_string());
    }

    if let Some(sorting) = &criteria.sorting_criteria {
        if !sorting.is_empty() {
            let tokens = sorting.iter().map(|s| s.to_string()).collect::<Vec<_>>();
            builder.set_param(RequestParam::SortBy.key(), tokens.join(","));
        }
    }

    if let Some(k) = criteria.k_neighbours.filter(|k| *k != 0) {
        builder.set_param(RequestParam::KNeighbours.key(), k.to_string());
    }

    if let Some(query) = non_blank(&criteria.query) {
        builder.set_param(RequestParam::Query.key(), string_to_url_string(query));
    }

    builder
}

/// `base?query`, or just `base` when no field is populated.
pub fn product_criteria_to_url(base: &str, criteria: &ProductCriteria) -> String {
    product_criteria_to_url_builder(base, criteria).build()
}

/// The bare query string (no leading `?`).
pub fn product_criteria_to_query(criteria: &ProductCriteria) -> String {
    product_criteria_to_url_builder("", criteria).query()
}

/// Parses a query string (with or without the leading `?`).
pub fn url_to_product_criteria(query: &str) -> ProductCriteria {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut params: HashMap<String, String> = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        // first occurrence wins
        params.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }
    let get = |param: RequestParam| params.get(param.key()).map(String::as_str).filter(|v| !v.is_empty());
    let ids = |param: RequestParam| get(param).and_then(split_ids);

    let sorting_criteria = get(RequestParam::SortBy)
        .map(|v| v.split(',').filter_map(SortBy::parse).collect())
        .unwrap_or_default();

    ProductCriteria {
        ingredients_to_include_ids: ids(RequestParam::IngredientsInclude),
        ingredients_to_exclude_ids: ids(RequestParam::IngredientsExclude),
        brands_to_include_ids: ids(RequestParam::BrandsInclude),
        brands_to_exclude_ids: ids(RequestParam::BrandsExclude),
        providers_ids: ids(RequestParam::Providers),
        categories_ids: ids(RequestParam::Categories),
        min_rating: get(RequestParam::MinRating).and_then(parse_int_prefix),
        sorting_criteria: Some(sorting_criteria),
        phrase: get(RequestParam::Phrase).map(str::to_string),
        k_neighbours: Some(get(RequestParam::KNeighbours).and_then(parse_int_prefix).unwrap_or(0)),
        query: get(RequestParam::Query).map(str::to_string),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn split_ids(value: &str) -> Option<Vec<String>> {
    let ids = value
        .split(',')
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();
    (!ids.is_empty()).then_some(ids)
}

/// Leading-integer parse: `"4 stars"` is 4, `"abc"` is none.
fn parse_int_prefix(value: &str) -> Option<i32> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i32 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_criteria::{SortOption, SortOrder};

    fn ids(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|v| v.to_string()).collect())
    }

    fn full_criteria() -> ProductCriteria {
        ProductCriteria {
            ingredients_to_include_ids: ids(&["5", "9"]),
            ingredients_to_exclude_ids: ids(&["12"]),
            brands_to_include_ids: ids(&["3", "1", "2"]),
            brands_to_exclude_ids: ids(&["77"]),
            providers_ids: ids(&["4"]),
            categories_ids: ids(&["8", "6"]),
            min_rating: Some(4),
            sorting_criteria: Some(vec![
                SortBy::new(SortOption::Rating, SortOrder::Descending),
                SortBy::new(SortOption::OpinionsCount, SortOrder::Ascending),
            ]),
            phrase: Some("rose water toner".to_string()),
            k_neighbours: Some(10),
            query: Some("something for dry skin".to_string()),
        }
    }

    #[test]
    fn encodes_documented_keys() {
        let criteria = ProductCriteria {
            ingredients_to_include_ids: ids(&["5", "9"]),
            min_rating: Some(3),
            sorting_criteria: Some(vec![SortBy::new(SortOption::Rating, SortOrder::Descending)]),
            ..Default::default()
        };
        let query = product_criteria_to_query(&criteria);
        let pairs = query.split('&').collect::<Vec<_>>();
        assert!(pairs.contains(&"ingredients-include=5,9"));
        assert!(pairs.contains(&"min-rating=3"));
        assert!(pairs.contains(&"sort-by=d-rating"));
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn empty_criteria_encodes_to_bare_base() {
        assert_eq!(product_criteria_to_url("/products", &ProductCriteria::default()), "/products");
        let criteria = ProductCriteria {
            ingredients_to_include_ids: Some(vec![]),
            sorting_criteria: Some(vec![]),
            min_rating: Some(0),
            k_neighbours: Some(0),
            phrase: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(product_criteria_to_query(&criteria), "");
    }

    #[test]
    fn phrase_is_normalized_and_space_escaped() {
        let criteria = ProductCriteria::from_phrase("  vitamin   c\tserum ");
        assert_eq!(
            product_criteria_to_url("/products", &criteria),
            "/products?phrase=vitamin%20c%20serum"
        );
        let decoded = url_to_product_criteria("?phrase=vitamin%20c%20serum");
        assert_eq!(decoded.phrase.as_deref(), Some("vitamin c serum"));
    }

    #[test]
    fn populated_fields_round_trip() {
        let criteria = full_criteria();
        let decoded = url_to_product_criteria(&product_criteria_to_query(&criteria));
        assert_eq!(decoded, criteria);
    }

    #[test]
    fn absent_fields_stay_absent_except_sorting_and_neighbours() {
        let criteria = ProductCriteria {
            brands_to_include_ids: ids(&["2"]),
            ..Default::default()
        };
        let decoded = url_to_product_criteria(&product_criteria_to_query(&criteria));
        assert_eq!(
            decoded,
            ProductCriteria {
                brands_to_include_ids: ids(&["2"]),
                sorting_criteria: Some(vec![]),
                k_neighbours: Some(0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn round_trip_is_idempotent() {
        let once = url_to_product_criteria(&product_criteria_to_query(&full_criteria()));
        let twice = url_to_product_criteria(&product_criteria_to_query(&once));
        assert_eq!(once, twice);
    }

    #[test]
    fn reserved_characters_in_phrase_survive() {
        let criteria = ProductCriteria::from_phrase("salt & pepper #1 + 50%");
        let query = product_criteria_to_query(&criteria);
        assert!(!query.contains(' '));
        assert_eq!(url_to_product_criteria(&query).phrase, criteria.phrase);
    }

    #[test]
    fn malformed_sort_tokens_are_dropped_individually() {
        let decoded = url_to_product_criteria("sort-by=d-rating,x-bogus");
        assert_eq!(
            decoded.sorting_criteria,
            Some(vec![SortBy::new(SortOption::Rating, SortOrder::Descending)])
        );
        let decoded = url_to_product_criteria("sort-by=,a-match-score,d-,rating");
        assert_eq!(
            decoded.sorting_criteria,
            Some(vec![SortBy::new(SortOption::MatchScore, SortOrder::Ascending)])
        );
    }

    #[test]
    fn numbers_parse_like_leading_integers() {
        assert_eq!(url_to_product_criteria("min-rating=4stars").min_rating, Some(4));
        assert_eq!(url_to_product_criteria("min-rating=-2").min_rating, Some(-2));
        assert_eq!(url_to_product_criteria("min-rating=abc").min_rating, None);
        assert_eq!(url_to_product_criteria("min-rating=").min_rating, None);
        assert_eq!(url_to_product_criteria("kNeighbours=25").k_neighbours, Some(25));
        assert_eq!(url_to_product_criteria("kNeighbours=many").k_neighbours, Some(0));
        assert_eq!(url_to_product_criteria("").k_neighbours, Some(0));
        assert_eq!(url_to_product_criteria("min-rating=99999999999").min_rating, None);
    }

    #[test]
    fn garbage_never_fails() {
        for input in ["", "?", "&&&", "=", "%%%", "a=b=c&&=x", "phrase=%E0%A4%A", "?sort-by=----,,,", "\u{0}\u{1F600}"] {
            let decoded = url_to_product_criteria(input);
            assert_eq!(decoded.sorting_criteria, Some(vec![]));
        }
    }

    #[test]
    fn first_occurrence_wins_and_unknown_keys_are_ignored() {
        let decoded = url_to_product_criteria("?utm=x&providers=1,2&providers=9&liked=true");
        assert_eq!(decoded.providers_ids, ids(&["1", "2"]));
        assert_eq!(decoded.phrase, None);
    }

    #[test]
    fn plus_decodes_as_space() {
        let decoded = url_to_product_criteria("query=oily+skin");
        assert_eq!(decoded.query.as_deref(), Some("oily skin"));
    }

    #[test]
    fn ids_with_reserved_characters_round_trip() {
        let criteria = ProductCriteria {
            brands_to_include_ids: ids(&["a+b", "x&y=1", "50%", "#7"]),
            ..Default::default()
        };
        let query = product_criteria_to_query(&criteria);
        assert_eq!(query, "brands-include=a%2Bb,x%26y%3D1,50%25,%237");
        assert_eq!(url_to_product_criteria(&query).brands_to_include_ids, criteria.brands_to_include_ids);
    }

    #[test]
    fn empty_id_segments_are_skipped() {
        assert_eq!(url_to_product_criteria("categories=3,,4,").categories_ids, ids(&["3", "4"]));
        assert_eq!(url_to_product_criteria("categories=,").categories_ids, None);
    }

    #[test]
    fn builder_replaces_existing_keys() {
        let mut builder = product_criteria_to_url_builder("/api/products/search", &ProductCriteria::from_phrase("cream"));
        builder.set_param(RequestParam::PageNumber.key(), "0");
        builder.set_param(RequestParam::PageNumber.key(), "3");
        assert_eq!(builder.build(), "/api/products/search?phrase=cream&page-number=3");
    }

    #[test]
    fn url_string_helpers_are_inverse_for_pretty_input() {
        assert_eq!(string_to_url_string(" a  b "), "a%20b");
        assert_eq!(url_string_to_string("a%20b"), "a b");
        assert_eq!(url_string_to_string("100%"), "100%");
    }
}
