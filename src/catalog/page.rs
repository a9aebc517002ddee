//! Pagination over a derived listing view.

use serde::Serialize;

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested (clamped to at least 1).
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Slice `items` into page `page` of `per_page` entries.
///
/// A page past the end is empty but still reports the totals.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_pages() {
        let items: Vec<u32> = (1..=10).collect();
        let first = paginate(&items, 1, 4);
        assert_eq!(first.items, vec![1, 2, 3, 4]);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = paginate(&items, 3, 4);
        assert_eq!(last.items, vec![9, 10]);
        assert!(!last.has_next());
    }

    #[test]
    fn page_past_end_is_empty() {
        let items = vec!['a', 'b'];
        let page = paginate(&items, 5, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn zero_arguments_are_clamped() {
        let items = vec![1, 2, 3];
        let page = paginate(&items, 0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.items, vec![1]);
    }

    #[test]
    fn empty_listing_has_no_pages() {
        let items: Vec<u8> = Vec::new();
        let page = paginate(&items, 1, 10);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
    }
}
