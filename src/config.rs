//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Demo server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Items per page for the demo catalog
    pub per_page: u64,
    /// TTL in seconds for cached page contents
    pub page_ttl: u64,
    /// TTL in seconds for the cached total count
    pub count_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Number of items seeded into the demo catalog
    pub catalog_size: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PER_PAGE` - Items per page (default: 10)
    /// - `PAGE_TTL` - Page cache TTL in seconds (default: 60)
    /// - `COUNT_TTL` - Count cache TTL in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 30)
    /// - `CATALOG_SIZE` - Seeded demo items (default: 300)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            per_page: env::var("PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            page_ttl: env::var("PAGE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            count_ttl: env::var("COUNT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            catalog_size: env::var("CATALOG_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            per_page: 10,
            page_ttl: 60,
            count_ttl: 3600,
            cleanup_interval: 30,
            catalog_size: 300,
        }
    }
}
