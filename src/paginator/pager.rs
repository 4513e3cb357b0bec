//! Cached Paginator
//!
//! Wraps an [`ItemSource`] with a cache lookup before slicing and a cache
//! store after, so repeated requests for the same page of an expensive
//! query avoid re-running it. Page contents and the total count are cached
//! under separate keys with independent TTLs.
//!
//! No single-flight coordination is attempted: two concurrent misses for
//! the same key may both run the query and both write the cache, last
//! write wins.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::cache::CacheBackend;
use crate::error::{PaginatorError, Result};
use crate::paginator::{key, ItemSource, Page};

// == Cached Paginator ==
/// Pages a data source into fixed-size pages, caching each page and the
/// total count.
///
/// Constructed per request with a caller-chosen namespace; the namespace,
/// page size, page number, and both TTLs all feed into the cache key, so
/// differently configured paginators never share entries.
pub struct CachedPaginator<T> {
    source: Arc<dyn ItemSource<T>>,
    cache: Arc<dyn CacheBackend>,
    per_page: u64,
    namespace: String,
    page_ttl: Duration,
    count_ttl: Duration,
    orphans: u64,
    allow_empty_first_page: bool,
    /// One-time memo of the total count for this instance's lifetime,
    /// saving repeated cache round trips within a single request.
    cached_count: OnceCell<u64>,
}

impl<T> CachedPaginator<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    // == Constructor ==
    /// Creates a paginator over `source`, caching into `cache`.
    ///
    /// `namespace` identifies the logical result set and is sanitized by
    /// replacing whitespace with underscores (see
    /// [`sanitize_namespace`](crate::paginator::sanitize_namespace) for the
    /// collision caveat). When `count_ttl` is `None` the page TTL is reused
    /// for the count.
    ///
    /// Fails with [`PaginatorError::InvalidConfig`] if `per_page` is zero.
    pub fn new(
        source: Arc<dyn ItemSource<T>>,
        cache: Arc<dyn CacheBackend>,
        per_page: u64,
        namespace: &str,
        page_ttl: Duration,
        count_ttl: Option<Duration>,
    ) -> Result<Self> {
        if per_page == 0 {
            return Err(PaginatorError::InvalidConfig(
                "per_page must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            source,
            cache,
            per_page,
            namespace: key::sanitize_namespace(namespace),
            page_ttl,
            count_ttl: count_ttl.unwrap_or(page_ttl),
            orphans: 0,
            allow_empty_first_page: true,
            cached_count: OnceCell::new(),
        })
    }

    /// Attaches up to `orphans` trailing items to the preceding page
    /// instead of giving them a short final page of their own.
    pub fn with_orphans(mut self, orphans: u64) -> Self {
        self.orphans = orphans;
        self
    }

    /// Controls whether an empty result set still yields page 1 (the
    /// default) or makes every page request out of range.
    pub fn allow_empty_first_page(mut self, allow: bool) -> Self {
        self.allow_empty_first_page = allow;
        self
    }

    // == Accessors ==
    /// Page size.
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Sanitized cache-key namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Cache key under which `number`'s item list is stored.
    pub fn page_cache_key(&self, number: u64) -> String {
        key::page_key(
            &self.namespace,
            self.per_page,
            number,
            self.page_ttl,
            self.count_ttl,
        )
    }

    /// Cache key under which the total count is stored.
    pub fn count_cache_key(&self) -> String {
        key::count_key(&self.namespace, self.page_ttl, self.count_ttl)
    }

    // == Count ==
    /// Total number of items, across all pages.
    ///
    /// Consults the count cache entry first and delegates to the source on
    /// a miss, storing the result with the count TTL. The value is also
    /// memoized for this instance's lifetime, so repeated calls within one
    /// request hit neither the cache service nor the source again.
    pub async fn count(&self) -> Result<u64> {
        self.cached_count
            .get_or_try_init(|| async {
                let cache_key = self.count_cache_key();
                if let Some(raw) = self.cache.get(&cache_key).await? {
                    if let Ok(total) = raw.parse::<u64>() {
                        debug!(key = %cache_key, total, "count cache hit");
                        return Ok(total);
                    }
                }

                let total = self.source.count().await?;
                debug!(key = %cache_key, total, "count cache miss, stored fresh total");
                self.cache
                    .set(&cache_key, total.to_string(), self.count_ttl)
                    .await?;
                Ok(total)
            })
            .await
            .copied()
    }

    // == Num Pages ==
    /// Total number of pages.
    ///
    /// Orphans shrink the countable tail; an empty result set still counts
    /// as one page unless empty first pages are disallowed.
    pub async fn num_pages(&self) -> Result<u64> {
        let count = self.count().await?;
        if count == 0 && !self.allow_empty_first_page {
            return Ok(0);
        }
        let hits = count.saturating_sub(self.orphans).max(1);
        Ok(hits.div_ceil(self.per_page))
    }

    // == Page ==
    /// Returns the [`Page`] for the given 1-based page number.
    ///
    /// Validates the number against the current page range, then attempts
    /// to pull the item list out of the cache. On a miss the underlying
    /// source is sliced and the fresh list is cached with the page TTL.
    pub async fn page(&self, number: u64) -> Result<Page<T>> {
        let num_pages = self.num_pages().await?;
        if number < 1 || number > num_pages {
            return Err(PaginatorError::PageOutOfRange {
                number: i64::try_from(number).unwrap_or(i64::MAX),
                num_pages,
            });
        }

        let cache_key = self.page_cache_key(number);
        if let Some(raw) = self.cache.get(&cache_key).await? {
            let items: Vec<T> = serde_json::from_str(&raw)?;
            debug!(key = %cache_key, page = number, "page cache hit");
            let count = self.count().await?;
            return Ok(Page::new(items, number, self.per_page, count, num_pages));
        }

        debug!(key = %cache_key, page = number, "page cache miss");
        let count = self.count().await?;
        let bottom = (number - 1) * self.per_page;
        let mut top = bottom + self.per_page;
        if top + self.orphans >= count {
            top = count;
        }

        let items = self.source.slice(bottom, top).await?;
        self.cache
            .set(&cache_key, serde_json::to_string(&items)?, self.page_ttl)
            .await?;

        Ok(Page::new(items, number, self.per_page, count, num_pages))
    }

    /// Returns the page named by a raw query-string value.
    ///
    /// Fails with [`PaginatorError::InvalidPageNumber`] when the value is
    /// not an integer; zero and negative values fall through to range
    /// validation and surface as [`PaginatorError::PageOutOfRange`].
    pub async fn page_from_param(&self, raw: &str) -> Result<Page<T>> {
        let number: i64 = raw
            .trim()
            .parse()
            .map_err(|_| PaginatorError::InvalidPageNumber(raw.to_string()))?;

        if number < 1 {
            return Err(PaginatorError::PageOutOfRange {
                number,
                num_pages: self.num_pages().await?,
            });
        }

        self.page(number as u64).await
    }
}
