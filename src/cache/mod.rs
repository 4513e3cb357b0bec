//! Cache Module
//!
//! Defines the cache backend seam the paginator talks to, plus an in-process
//! implementation with TTL expiration.

mod backend;
mod entry;
mod memory;

// Re-export public types
pub use backend::CacheBackend;
pub use entry::CacheEntry;
pub use memory::MemoryCache;
