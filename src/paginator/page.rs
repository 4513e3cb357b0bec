//! Page Module
//!
//! A single page of results. Immutable once constructed; the pagination
//! geometry (count, page total, page size) is snapshotted at construction
//! time so the page stands on its own without a paginator reference.

// == Page ==
/// One page of items, 1-based.
#[derive(Debug, Clone)]
pub struct Page<T> {
    items: Vec<T>,
    number: u64,
    per_page: u64,
    count: u64,
    num_pages: u64,
}

impl<T> Page<T> {
    // == Constructor ==
    pub(crate) fn new(items: Vec<T>, number: u64, per_page: u64, count: u64, num_pages: u64) -> Self {
        Self {
            items,
            number,
            per_page,
            count,
            num_pages,
        }
    }

    /// The items on this page, in source order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page and returns its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// 1-based page number.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Total number of items across all pages, as of page construction.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Total number of pages, as of page construction.
    pub fn num_pages(&self) -> u64 {
        self.num_pages
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // == Navigation ==
    /// True if a page follows this one.
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    /// True if a page precedes this one.
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// True if this is not the only page.
    pub fn has_other_pages(&self) -> bool {
        self.has_next() || self.has_previous()
    }

    /// The following page number, if any.
    pub fn next_page_number(&self) -> Option<u64> {
        self.has_next().then(|| self.number + 1)
    }

    /// The preceding page number, if any.
    pub fn previous_page_number(&self) -> Option<u64> {
        self.has_previous().then(|| self.number - 1)
    }

    /// 1-based index of the first item on this page relative to the whole
    /// result set; 0 for an empty result set.
    pub fn start_index(&self) -> u64 {
        if self.count == 0 {
            0
        } else {
            self.per_page * (self.number - 1) + 1
        }
    }

    /// 1-based index of the last item on this page relative to the whole
    /// result set.
    pub fn end_index(&self) -> u64 {
        // The last page absorbs orphans, so it ends at the total count
        if self.number == self.num_pages {
            self.count
        } else {
            self.number * self.per_page
        }
    }
}
