//! Cached Paginator - page-by-page result caching over pluggable sources
//!
//! Wraps a countable, sliceable data source with a caching layer so
//! repeated requests for the same page of an expensive query avoid
//! re-running it, and turns page positions into sliding-window navigation
//! links.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod links;
pub mod models;
pub mod paginator;
pub mod tasks;
pub mod view;

pub use api::AppState;
pub use cache::{CacheBackend, MemoryCache};
pub use config::Config;
pub use error::{PaginatorError, Result};
pub use links::{page_links, LinkConfig, PageLink, QueryParams};
pub use paginator::{CachedPaginator, ItemSource, Page, VecSource};
pub use tasks::spawn_cleanup_task;
pub use view::ViewPager;
