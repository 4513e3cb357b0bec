//! Response DTOs for the demo server
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::links::PageLink;
use crate::models::Product;
use crate::paginator::Page;

/// Response body for the paginated catalog (GET /products)
#[derive(Debug, Clone, Serialize)]
pub struct ProductPageResponse {
    /// Items on the requested page
    pub items: Vec<Product>,
    /// 1-based page number
    pub page: u64,
    /// Total number of pages
    pub num_pages: u64,
    /// Total number of items across all pages
    pub total: u64,
    /// Ordered navigation link descriptors
    pub links: Vec<PageLink>,
}

impl ProductPageResponse {
    /// Creates a response from a page and its links.
    pub fn new(page: Page<Product>, links: Vec<PageLink>) -> Self {
        Self {
            page: page.number(),
            num_pages: page.num_pages(),
            total: page.count(),
            items: page.into_items(),
            links,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
