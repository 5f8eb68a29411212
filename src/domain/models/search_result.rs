//! Paginated result envelope.

use super::criteria::Pagination;

/// Items of one page plus the totals needed to navigate the rest.
///
/// Page navigation values are computed on demand from `total_count` and the
/// pagination, so they can never disagree with each other.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<T> {
    items: Vec<T>,
    total_count: u64,
    pagination: Pagination,
}

impl<T> SearchResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, pagination: Pagination) -> Self {
        Self {
            items,
            total_count,
            pagination,
        }
    }

    /// Items in the order the platform returned them.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    pub const fn current_page(&self) -> u32 {
        self.pagination.page()
    }

    pub const fn per_page(&self) -> u32 {
        self.pagination.per_page()
    }

    /// Ceiling of `total_count / per_page`, never less than 1.
    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_count, self.pagination.per_page())
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.current_page()) < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page() > 1
    }
}

pub fn total_pages(total_count: u64, per_page: u32) -> u64 {
    let per_page = u64::from(per_page.max(1));
    total_count.div_ceil(per_page).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_result_still_has_one_page() {
        let result: SearchResult<u8> = SearchResult::new(vec![], 0, Pagination::default());
        assert_eq!(result.total_pages(), 1);
        assert!(!result.has_next());
        assert!(!result.has_prev());
        assert!(result.is_empty());
    }

    #[test]
    fn test_middle_page_navigation() {
        let result = SearchResult::new(vec![1, 2, 3], 25, Pagination::new(2, 10));
        assert_eq!(result.total_pages(), 3);
        assert!(result.has_next());
        assert!(result.has_prev());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let result = SearchResult::new(vec![1], 21, Pagination::new(3, 10));
        assert_eq!(result.total_pages(), 3);
        assert!(!result.has_next());
    }

    proptest! {
        #[test]
        fn prop_total_pages_is_ceiling_and_at_least_one(total in 0u64..1_000_000, per_page in 1u32..=100) {
            let pages = total_pages(total, per_page);
            let expected = if total == 0 { 1 } else { (total + u64::from(per_page) - 1) / u64::from(per_page) };
            prop_assert_eq!(pages, expected);
            prop_assert!(pages >= 1);
        }

        #[test]
        fn prop_navigation_flags_follow_page(total in 0u64..10_000, page in 1u32..200, per_page in 1u32..=100) {
            let result: SearchResult<()> = SearchResult::new(vec![], total, Pagination::new(page, per_page));
            prop_assert_eq!(result.has_next(), u64::from(page) < result.total_pages());
            prop_assert_eq!(result.has_prev(), page > 1);
        }
    }
}
