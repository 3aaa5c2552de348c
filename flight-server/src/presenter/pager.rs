//! Pagination over the itinerary list.

use serde::Serialize;

/// Number of itineraries shown per page.
pub const ITEMS_PER_PAGE: usize = 10;

/// Return the half-open window `[page * per, (page + 1) * per)` of a
/// slice, clipped to its bounds. An out-of-range page yields an empty
/// slice.
pub fn paginate<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    let start = page.saturating_mul(items_per_page).min(items.len());
    let end = start.saturating_add(items_per_page).min(items.len());
    &items[start..end]
}

/// Current page of the result list.
///
/// The page index is plain UI state: a non-negative integer moved by
/// `next`/`prev` transitions and reset to 0 whenever the underlying
/// itinerary list changes, so a stale page can never outlive a shorter
/// list.
#[derive(Debug, Clone, Serialize)]
pub struct Pager {
    page: usize,
    items_per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    /// Create a pager at page 0 with the standard page size.
    pub fn new() -> Self {
        Self {
            page: 0,
            items_per_page: ITEMS_PER_PAGE,
        }
    }

    /// Override the page size (mainly for tests).
    pub fn with_items_per_page(mut self, n: usize) -> Self {
        self.items_per_page = n;
        self
    }

    /// The current page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The configured page size.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// The window of `items` for the current page.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page, self.items_per_page)
    }

    /// Advance to the next page if its window would be non-empty.
    /// Returns whether the page changed.
    pub fn next(&mut self, total: usize) -> bool {
        if (self.page + 1) * self.items_per_page < total {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page, never below 0. Returns whether the page changed.
    pub fn prev(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Return to page 0. Must be called whenever the underlying list
    /// changes.
    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Number of pages needed for `total` items.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.items_per_page)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every item appears in exactly one page window.
        #[test]
        fn windows_partition_the_list(total in 0usize..200, per in 1usize..20) {
            let list: Vec<usize> = (0..total).collect();
            let mut seen = Vec::new();
            let pages = total.div_ceil(per).max(1);
            for page in 0..pages {
                seen.extend_from_slice(paginate(&list, page, per));
            }
            prop_assert_eq!(seen, list);
        }

        /// A window is never larger than the page size.
        #[test]
        fn window_bounded_by_page_size(total in 0usize..200, page in 0usize..30, per in 1usize..20) {
            let list: Vec<usize> = (0..total).collect();
            prop_assert!(paginate(&list, page, per).len() <= per);
        }

        /// next() followed by prev() is the identity whenever next()
        /// advanced.
        #[test]
        fn next_prev_inverse(total in 0usize..200) {
            let mut pager = Pager::new();
            let before = pager.page();
            if pager.next(total) {
                pager.prev();
                prop_assert_eq!(pager.page(), before);
            }
        }

        /// The pager can never be driven to an empty window by next().
        #[test]
        fn next_never_reaches_empty_window(total in 1usize..200, steps in 0usize..40) {
            let list: Vec<usize> = (0..total).collect();
            let mut pager = Pager::new();
            for _ in 0..steps {
                pager.next(total);
            }
            prop_assert!(!pager.window(&list).is_empty());
        }
    }
}
