//! Cache Backend Trait
//!
//! The externally supplied key-value service the paginator caches into.
//! Only per-key get/set with TTL is required; no cross-key transactions.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Key-value cache service consumed by the paginator.
///
/// Implementations must provide atomic get/set per key. Two concurrent
/// misses for the same key may both populate it; last write wins.
/// Backend failures are surfaced to the caller, never swallowed.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Retrieves the value stored under `key`, or None if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key` for the given TTL, overwriting any
    /// previous value and resetting its lifetime.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()>;
}
