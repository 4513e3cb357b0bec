//! Paginator Module
//!
//! Provides page-by-page caching over a pluggable item source: the page
//! contents and the total count are cached independently, each with its
//! own TTL.

mod key;
mod page;
mod pager;
mod source;

// Re-export public types
pub use key::{count_key, page_key, sanitize_namespace};
pub use page::Page;
pub use pager::CachedPaginator;
pub use source::{ItemSource, VecSource};
