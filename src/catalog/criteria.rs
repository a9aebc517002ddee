//! Filter criteria — the search/filter/sort parameters chosen on a listing page.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use super::model::{CatalogItem, Language, Price};

/// Closed price interval `[min, max]`.
///
/// An inverted range (`min > max`) is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

impl PriceRange {
    pub fn new(min: Price, max: Price) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum SortKey {
    /// Keep source order.
    #[default]
    Relevance,
    /// Most recent release date first.
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Newest => "newest",
            Self::PriceAsc => "priceAsc",
            Self::PriceDesc => "priceDesc",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient parse: unknown keys fall back to `Relevance`.
impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s {
            "newest" => Self::Newest,
            "priceAsc" | "price_asc" => Self::PriceAsc,
            "priceDesc" | "price_desc" => Self::PriceDesc,
            _ => Self::Relevance,
        }
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

/// Highest accepted rating floor.
pub const MAX_RATING_FLOOR: u8 = 5;

/// The active filter/sort parameters for one filter pass.
///
/// A value object: every change produces a new criteria value, and every
/// pass is computed against the full source catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title and author.
    #[serde(default)]
    pub search_text: String,
    pub price_range: PriceRange,
    /// Accepted languages; empty means no restriction.
    #[serde(default)]
    pub languages: BTreeSet<Language>,
    /// Minimum whole-star rating (1..=5); `None` means no restriction.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_rating_floor"
    )]
    pub min_rating: Option<u8>,
    #[serde(default)]
    pub sort_key: SortKey,
}

impl FilterCriteria {
    /// Criteria that match everything inside `price_range`, in source order.
    pub fn new(price_range: PriceRange) -> Self {
        Self {
            search_text: String::new(),
            price_range,
            languages: BTreeSet::new(),
            min_rating: None,
            sort_key: SortKey::Relevance,
        }
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_price_range(mut self, min: Price, max: Price) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.languages = languages.into_iter().collect();
        self
    }

    /// Set the rating floor. `0` clears it; values above 5 are clamped.
    pub fn with_min_rating(mut self, stars: u8) -> Self {
        self.min_rating = rating_floor(Some(stars));
        self
    }

    pub fn without_min_rating(mut self) -> Self {
        self.min_rating = None;
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Toggle a language in the accepted set, returning whether it is now selected.
    pub fn toggle_language(&mut self, language: Language) -> bool {
        if self.languages.remove(&language) {
            false
        } else {
            self.languages.insert(language);
            true
        }
    }

    /// Whether `item` passes every active predicate.
    ///
    /// Predicates run in a fixed order: text, price, language, rating.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.matches_text(item)
            && self.price_range.contains(item.price)
            && self.matches_language(item)
            && self.matches_rating(item)
    }

    fn matches_text(&self, item: &CatalogItem) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        item.title.to_lowercase().contains(&needle)
            || item.author_name.to_lowercase().contains(&needle)
    }

    fn matches_language(&self, item: &CatalogItem) -> bool {
        self.languages.is_empty() || self.languages.contains(&item.language)
    }

    fn matches_rating(&self, item: &CatalogItem) -> bool {
        match self.min_rating {
            None => true,
            Some(floor) => item.rating.stars() >= floor.min(MAX_RATING_FLOOR),
        }
    }
}

fn rating_floor(stars: Option<u8>) -> Option<u8> {
    match stars {
        None | Some(0) => None,
        Some(n) => Some(n.min(MAX_RATING_FLOOR)),
    }
}

fn deserialize_rating_floor<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u8>::deserialize(deserializer).map(rating_floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::Rating;

    fn item(title: &str, author: &str) -> CatalogItem {
        CatalogItem::new(1, title, author, 1)
            .with_price(Price::from_units(10))
            .with_rating(Rating::new(4.5).unwrap())
    }

    fn open_criteria() -> FilterCriteria {
        FilterCriteria::new(PriceRange::new(Price::ZERO, Price::from_units(100)))
    }

    #[test]
    fn sort_key_unknown_falls_back_to_relevance() {
        assert_eq!(SortKey::from("bestselling"), SortKey::Relevance);
        assert_eq!(SortKey::from("priceDesc"), SortKey::PriceDesc);
        let parsed: SortKey = serde_json::from_str("\"popularity\"").unwrap();
        assert_eq!(parsed, SortKey::Relevance);
    }

    #[test]
    fn sort_key_serializes_camel_case() {
        assert_eq!(serde_json::to_string(&SortKey::PriceAsc).unwrap(), "\"priceAsc\"");
        let parsed: SortKey = serde_json::from_str("\"priceAsc\"").unwrap();
        assert_eq!(parsed, SortKey::PriceAsc);
    }

    #[test]
    fn text_match_is_case_insensitive_on_title_and_author() {
        let book = item("Le Mystère", "Gaston Leroux");
        for query in ["mystère", "MYSTÈRE", "myst", "leroux"] {
            assert!(open_criteria().with_search(query).matches(&book), "{query}");
        }
        assert!(!open_criteria().with_search("chambre").matches(&book));
    }

    #[test]
    fn price_range_is_inclusive() {
        let book = item("A", "B");
        let c = open_criteria().with_price_range(Price::from_units(10), Price::from_units(10));
        assert!(c.matches(&book));
        let c = open_criteria().with_price_range(Price::from_units(11), Price::from_units(20));
        assert!(!c.matches(&book));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let book = item("A", "B");
        let c = open_criteria().with_price_range(Price::from_units(50), Price::from_units(5));
        assert!(c.price_range.is_inverted());
        assert!(!c.matches(&book));
    }

    #[test]
    fn rating_floor_uses_whole_stars() {
        let book = item("A", "B");
        assert!(open_criteria().with_min_rating(4).matches(&book));
        assert!(!open_criteria().with_min_rating(5).matches(&book));
    }

    #[test]
    fn min_rating_zero_clears_and_large_clamps() {
        assert_eq!(open_criteria().with_min_rating(0).min_rating, None);
        assert_eq!(open_criteria().with_min_rating(9).min_rating, Some(5));
    }

    #[test]
    fn rating_floor_is_not_passed_by_rounding() {
        let book = item("A", "B").with_rating(Rating::new(4.95).unwrap());
        assert!(!open_criteria().with_min_rating(5).matches(&book));
        assert!(open_criteria().with_min_rating(4).matches(&book));
    }

    #[test]
    fn deserialized_rating_floor_is_normalized() {
        let json = |floor: u8| {
            format!(
                r#"{{"price_range":{{"min":"0","max":"100"}},"min_rating":{floor}}}"#
            )
        };
        let clamped: FilterCriteria = serde_json::from_str(&json(9)).unwrap();
        assert_eq!(clamped.min_rating, Some(5));
        assert_eq!(clamped, open_criteria().with_min_rating(9));

        let cleared: FilterCriteria = serde_json::from_str(&json(0)).unwrap();
        assert_eq!(cleared.min_rating, None);

        let missing: FilterCriteria =
            serde_json::from_str(r#"{"price_range":{"min":"0","max":"100"}}"#).unwrap();
        assert_eq!(missing.min_rating, None);
    }

    #[test]
    fn out_of_range_floor_set_directly_still_clamps() {
        let book = item("A", "B").with_rating(Rating::MAX);
        let mut c = open_criteria();
        c.min_rating = Some(9);
        assert!(c.matches(&book));
    }

    #[test]
    fn toggle_language_adds_then_removes() {
        let mut c = open_criteria();
        assert!(c.toggle_language(Language::French));
        assert!(c.languages.contains(&Language::French));
        assert!(!c.toggle_language(Language::French));
        assert!(c.languages.is_empty());
    }
}
