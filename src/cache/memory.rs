//! In-Memory Cache Backend
//!
//! HashMap-backed cache with TTL expiration, suitable for a single process.
//! Expired entries are dropped on read and swept by the background cleanup
//! task.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheBackend, CacheEntry};
use crate::error::Result;

// == Memory Cache ==
/// In-process cache backend with TTL support.
#[derive(Debug, Default)]
pub struct MemoryCache {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    // == Constructor ==
    /// Creates an empty MemoryCache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, including not-yet-swept
    /// expired ones.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // Write lock: an expired entry is removed on the spot
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), CacheEntry::new(value, ttl));
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new();

        cache
            .set("key1", "value1".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        let value = cache.get("key1").await.unwrap();
        assert_eq!(value, Some("value1".to_string()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = MemoryCache::new();

        let value = cache.get("nonexistent").await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_overwrite_resets_value_and_ttl() {
        let cache = MemoryCache::new();

        cache
            .set("key1", "value1".to_string(), Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set("key1", "value2".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        let value = cache.get("key1").await.unwrap();
        assert_eq!(value, Some("value2".to_string()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_ttl_expiration() {
        let cache = MemoryCache::new();

        cache
            .set("key1", "value1".to_string(), Duration::from_millis(50))
            .await
            .unwrap();

        assert!(cache.get("key1").await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(80)).await;

        // Expired entries read back as absent and are removed
        assert!(cache.get("key1").await.unwrap().is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let cache = MemoryCache::new();

        cache
            .set("short", "v".to_string(), Duration::from_millis(50))
            .await
            .unwrap();
        cache
            .set("long", "v".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(80)).await;

        let removed = cache.cleanup_expired().await;
        assert_eq!(removed, 1);
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("long").await.unwrap().is_some());
    }
}
