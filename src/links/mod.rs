//! Links Module
//!
//! Turns a page position into a renderable, ordered list of navigation
//! link descriptors: First/Previous, a sliding window of numbered pages,
//! and Next/Last. Produces data only; markup belongs to the view layer.

mod query;
mod window;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use query::QueryParams;
pub use window::{page_links, LinkConfig, PageLink};
