//! API Module
//!
//! HTTP surface of the demo server.

mod handlers;
mod routes;

pub use handlers::AppState;
pub use routes::create_router;
