//! Structured product search / filter request.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};


/// What a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    MatchScore,
    OpinionsCount,
    RatesCount,
    Rating,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::MatchScore,
        SortOption::OpinionsCount,
        SortOption::RatesCount,
        SortOption::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::MatchScore => "match-score",
            SortOption::OpinionsCount => "opinions-count",
            SortOption::RatesCount => "rates-count",
            SortOption::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::MatchScore => "Best match",
            SortOption::OpinionsCount => "Most reviewed",
            SortOption::RatesCount => "Most rated",
            SortOption::Rating => "Rating",
        }
    }
}

impl FromStr for SortOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL.into_iter().find(|o| o.as_str() == s).ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "a")]
    Ascending,
    #[serde(rename = "d")]
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "a",
            SortOrder::Descending => "d",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(SortOrder::Ascending),
            "d" => Ok(SortOrder::Descending),
            _ => Err(()),
        }
    }
}

/// One sort key. Position in [`ProductCriteria::sorting_criteria`] is its priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortBy {
    pub option: SortOption,
    pub order: SortOrder,
}

impl SortBy {
    pub fn new(option: SortOption, order: SortOrder) -> Self {
        Self { option, order }
    }

    /// Parses an `order-option` token such as `d-match-score`.
    pub fn parse(token: &str) -> Option<Self> {
        let (order, option) = token.split_once('-')?;
        Some(Self {
            order: order.parse().ok()?,
            option: option.parse().ok()?,
        })
    }
}

// Serialized as the URL token, e.g. `a-rating`.
impl Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.order.as_str(), self.option.as_str())
    }
}

/// A product search request. Every field is independently optional.
///
/// `phrase` drives the classic search, `query` and `k_neighbours` the AI search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductCriteria {
    pub ingredients_to_include_ids: Option<Vec<String>>,
    pub ingredients_to_exclude_ids: Option<Vec<String>>,
    pub brands_to_include_ids: Option<Vec<String>>,
    pub brands_to_exclude_ids: Option<Vec<String>>,
    pub providers_ids: Option<Vec<String>>,
    pub categories_ids: Option<Vec<String>>,
    pub min_rating: Option<i32>,
    pub sorting_criteria: Option<Vec<SortBy>>,
    pub phrase: Option<String>,
    pub k_neighbours: Option<i32>,
    pub query: Option<String>,
}

impl ProductCriteria {
    pub fn from_phrase(phrase: impl Into<String>) -> Self {
        Self {
            phrase: Some(phrase.into()),
            ..Default::default()
        }
    }

    pub fn from_ai_query(query: impl Into<String>, k_neighbours: i32) -> Self {
        Self {
            query: Some(query.into()),
            k_neighbours: Some(k_neighbours),
            ..Default::default()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_parses_multi_dash_options() {
        assert_eq!(
            SortBy::parse("d-match-score"),
            Some(SortBy::new(SortOption::MatchScore, SortOrder::Descending))
        );
        assert_eq!(
            SortBy::parse("a-rates-count"),
            Some(SortBy::new(SortOption::RatesCount, SortOrder::Ascending))
        );
    }

    #[test]
    fn sort_by_rejects_bad_tokens() {
        assert_eq!(SortBy::parse("x-rating"), None);
        assert_eq!(SortBy::parse("d-bogus"), None);
        assert_eq!(SortBy::parse("d"), None);
        assert_eq!(SortBy::parse("desc-rating"), None);
        assert_eq!(SortBy::parse(""), None);
    }

    #[test]
    fn sort_by_displays_as_url_token() {
        let sort = SortBy::new(SortOption::OpinionsCount, SortOrder::Ascending);
        assert_eq!(sort.to_string(), "a-opinions-count");
        assert_eq!(SortBy::parse(&sort.to_string()), Some(sort));
    }
}
