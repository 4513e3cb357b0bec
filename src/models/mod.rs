//! Models Module
//!
//! DTOs for the demo server: the seeded catalog item and the response
//! bodies.

mod catalog;
mod responses;

pub use catalog::{seed_catalog, Product};
pub use responses::{HealthResponse, ProductPageResponse};
