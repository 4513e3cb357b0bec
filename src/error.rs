//! Error types for the cached paginator
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Paginator Error Enum ==
/// Unified error type for pagination and caching.
#[derive(Error, Debug)]
pub enum PaginatorError {
    /// Page argument could not be parsed as an integer
    #[error("Page number is not an integer: {0}")]
    InvalidPageNumber(String),

    /// Page number is outside the valid range for the current count
    #[error("Page {number} is out of range (valid pages: 1..={num_pages})")]
    PageOutOfRange {
        /// The requested page number
        number: i64,
        /// The last valid page
        num_pages: u64,
    },

    /// Paginator was constructed with invalid parameters
    #[error("Invalid paginator configuration: {0}")]
    InvalidConfig(String),

    /// The cache backend failed; never masked as an empty result
    #[error("Cache backend error: {0}")]
    Cache(String),

    /// The underlying data source failed
    #[error("Data source error: {0}")]
    Source(String),

    /// A cached page payload could not be encoded or decoded
    #[error("Page serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for PaginatorError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PaginatorError::InvalidPageNumber(_) | PaginatorError::PageOutOfRange { .. } => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            PaginatorError::InvalidConfig(_)
            | PaginatorError::Cache(_)
            | PaginatorError::Source(_)
            | PaginatorError::Serialization(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cached paginator.
pub type Result<T> = std::result::Result<T, PaginatorError>;
