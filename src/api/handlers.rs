//! API Handlers
//!
//! HTTP request handlers for the demo catalog server. The catalog handler
//! is the end-to-end path through the library: view pager -> cached
//! paginator -> link window.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{RawQuery, State};
use axum::Json;

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::error::Result;
use crate::links::{page_links, LinkConfig, QueryParams};
use crate::models::{seed_catalog, HealthResponse, Product, ProductPageResponse};
use crate::paginator::VecSource;
use crate::view::ViewPager;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache backend
    pub cache: Arc<MemoryCache>,
    /// The paginated data source
    pub catalog: Arc<VecSource<Product>>,
    /// Per-request paginator factory
    pub pager: ViewPager,
    /// Link window configuration
    pub links: LinkConfig,
}

impl AppState {
    /// Creates a new AppState over the given catalog items.
    pub fn new(items: Vec<Product>, pager: ViewPager) -> Self {
        Self {
            cache: Arc::new(MemoryCache::new()),
            catalog: Arc::new(VecSource::new(items)),
            pager,
            links: LinkConfig::default(),
        }
    }

    /// Creates a new AppState from configuration, seeding the demo catalog.
    pub fn from_config(config: &Config) -> Self {
        let pager = ViewPager::new(|| "product_catalog".to_string())
            .per_page(config.per_page)
            .page_ttl(Duration::from_secs(config.page_ttl))
            .count_ttl(Duration::from_secs(config.count_ttl));
        Self::new(seed_catalog(config.catalog_size), pager)
    }
}

/// Handler for GET /products
///
/// Paginates the catalog by the `page` query parameter (default 1) and
/// responds with the page items plus navigation links. Invalid or
/// out-of-range pages map to 404 via the error type.
pub async fn products_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<ProductPageResponse>> {
    let query = QueryParams::parse(raw.as_deref().unwrap_or(""));
    let requested = query.get(&state.links.page_param).unwrap_or("1").to_string();

    let paginator = state
        .pager
        .paginator(state.catalog.clone(), state.cache.clone())?;
    let page = paginator.page_from_param(&requested).await?;

    let links = page_links(page.number(), page.num_pages(), &query, &state.links);
    Ok(Json(ProductPageResponse::new(page, links)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
