//! Item Source Trait
//!
//! The data source seam: anything that can report its total size and
//! produce an ordered slice. The paginator never mutates a source; it only
//! triggers query execution on a cache miss.

use async_trait::async_trait;

use crate::error::Result;

// == Item Source ==
/// A sliceable, countable sequence of items backing a paginator.
///
/// `slice` uses half-open `[start, end)` zero-based bounds, matching how
/// the paginator computes page ranges.
#[async_trait]
pub trait ItemSource<T>: Send + Sync {
    /// Total number of items across all pages.
    async fn count(&self) -> Result<u64>;

    /// Items in `[start, end)`, in source order.
    async fn slice(&self, start: u64, end: u64) -> Result<Vec<T>>;
}

// == Vec Source ==
/// An in-memory source over a fixed vector of items.
///
/// Used by the demo catalog and tests; a real deployment would implement
/// [`ItemSource`] over a database query instead.
#[derive(Debug, Clone)]
pub struct VecSource<T> {
    items: Vec<T>,
}

impl<T> VecSource<T> {
    /// Wraps a vector of items.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<T> ItemSource<T> for VecSource<T>
where
    T: Clone + Send + Sync,
{
    async fn count(&self) -> Result<u64> {
        Ok(self.items.len() as u64)
    }

    async fn slice(&self, start: u64, end: u64) -> Result<Vec<T>> {
        let len = self.items.len();
        let start = (start as usize).min(len);
        let end = (end as usize).min(len).max(start);
        Ok(self.items[start..end].to_vec())
    }
}
