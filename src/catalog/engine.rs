//! Filter/sort engine — derives a listing view from the source catalog.
//!
//! `apply` is a pure function of the source sequence and a criteria value:
//! it never mutates or reorders the source, and it always recomputes from
//! the full source so relaxing a filter brings excluded items back.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::criteria::{FilterCriteria, PriceRange, SortKey};
use super::model::{CatalogItem, Price};

/// Filter `source` by `criteria` and order the result by its sort key.
///
/// Sorting is stable: items with equal keys keep their source order.
/// Malformed criteria degrade to "no match" (inverted price range) or
/// "no reordering" (relevance); this function never fails.
pub fn apply<'a>(source: &'a [CatalogItem], criteria: &FilterCriteria) -> Vec<&'a CatalogItem> {
    if criteria.price_range.is_inverted() {
        warn!(
            min = %criteria.price_range.min,
            max = %criteria.price_range.max,
            "Inverted price range, no item can match"
        );
    }

    let mut result: Vec<&CatalogItem> = source.iter().filter(|item| criteria.matches(item)).collect();

    match criteria.sort_key {
        SortKey::Relevance => {}
        SortKey::Newest => result.sort_by_key(|item| Reverse(item.release_date)),
        SortKey::PriceAsc => result.sort_by_key(|item| item.price),
        SortKey::PriceDesc => result.sort_by_key(|item| Reverse(item.price)),
    }

    debug!(
        source = source.len(),
        matched = result.len(),
        sort = %criteria.sort_key,
        "Filter pass complete"
    );

    result
}

/// Observed `[min, max]` price over `source`, or `[0, 0]` when empty.
pub fn price_bounds(source: &[CatalogItem]) -> PriceRange {
    let min = source.iter().map(|item| item.price).min();
    let max = source.iter().map(|item| item.price).max();
    match (min, max) {
        (Some(min), Some(max)) => PriceRange::new(min, max),
        _ => PriceRange::new(Price::ZERO, Price::ZERO),
    }
}

/// Canonical default criteria for `source`.
///
/// Empty search, the catalog's full observed price range, no language or
/// rating restriction, relevance order. `apply(source, &reset(source))`
/// returns the source unchanged.
pub fn reset(source: &[CatalogItem]) -> FilterCriteria {
    FilterCriteria::new(price_bounds(source))
}

/// An immutable, loaded catalog.
///
/// Owns the source items handed over by the catalog source collaborator;
/// every filter pass runs against them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn price_bounds(&self) -> PriceRange {
        price_bounds(&self.items)
    }

    pub fn reset(&self) -> FilterCriteria {
        reset(&self.items)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&CatalogItem> {
        apply(&self.items, criteria)
    }

    /// All items by one author, in catalog order.
    pub fn by_author(&self, author_id: u64) -> Vec<&CatalogItem> {
        self.items.iter().filter(|item| item.author_id == author_id).collect()
    }
}

impl From<Vec<CatalogItem>> for Catalog {
    fn from(items: Vec<CatalogItem>) -> Self {
        Self::new(items)
    }
}
