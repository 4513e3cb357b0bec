//! View Pager
//!
//! Request-facing adapter that builds a [`CachedPaginator`] per request.
//! The cache-key namespace comes from an injected provider supplied at
//! construction time, so each view decides how its result sets are keyed
//! without any subclassing contract.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::CacheBackend;
use crate::error::Result;
use crate::paginator::{CachedPaginator, ItemSource};

/// Default page size when none is configured.
pub const DEFAULT_PER_PAGE: u64 = 10;
/// Default TTL for cached page contents.
pub const DEFAULT_PAGE_TTL: Duration = Duration::from_secs(60);
/// Default TTL for the cached total count; longer than the page TTL since
/// totals change less often than slice contents.
pub const DEFAULT_COUNT_TTL: Duration = Duration::from_secs(3600);

// == View Pager ==
/// Pagination settings plus a namespace provider, shared across requests.
#[derive(Clone)]
pub struct ViewPager {
    per_page: u64,
    page_ttl: Duration,
    count_ttl: Duration,
    namespace_fn: Arc<dyn Fn() -> String + Send + Sync>,
}

impl ViewPager {
    // == Constructor ==
    /// Creates a pager with default sizing and TTLs; `namespace_fn` yields
    /// the cache-key namespace for the current request context.
    pub fn new(namespace_fn: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page_ttl: DEFAULT_PAGE_TTL,
            count_ttl: DEFAULT_COUNT_TTL,
            namespace_fn: Arc::new(namespace_fn),
        }
    }

    /// Overrides the page size.
    pub fn per_page(mut self, per_page: u64) -> Self {
        self.per_page = per_page;
        self
    }

    /// Overrides the page-content TTL.
    pub fn page_ttl(mut self, ttl: Duration) -> Self {
        self.page_ttl = ttl;
        self
    }

    /// Overrides the count TTL.
    pub fn count_ttl(mut self, ttl: Duration) -> Self {
        self.count_ttl = ttl;
        self
    }

    // == Paginator ==
    /// Builds a request-scoped paginator over `source`, caching into
    /// `cache` under this pager's namespace.
    pub fn paginator<T>(
        &self,
        source: Arc<dyn ItemSource<T>>,
        cache: Arc<dyn CacheBackend>,
    ) -> Result<CachedPaginator<T>>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        CachedPaginator::new(
            source,
            cache,
            self.per_page,
            &(self.namespace_fn)(),
            self.page_ttl,
            Some(self.count_ttl),
        )
    }
}
