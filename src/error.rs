//! Error types for the property service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Service Error Enum ==
/// Errors on the correctness path. Metrics failures never become one of
/// these; they travel in-band in `CacheStatsSnapshot::error`.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The record store could not produce the collection
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),

    /// The cache backend failed a get or set
    #[error("Cache backend error: {0}")]
    Backend(String),

    /// Rejected key or value
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Internal(format!("serialization failed: {}", err))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the property service.
pub type Result<T> = std::result::Result<T, ServiceError>;
