//! Response DTOs for the property service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::properties::PropertyRecord;

/// Response body for GET /properties
///
/// Each record serializes as `{id, title, description, price, location,
/// created_at}` with `price` as a string and `created_at` in ISO-8601.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyListResponse {
    pub properties: Vec<PropertyRecord>,
}

impl PropertyListResponse {
    pub fn new(properties: Vec<PropertyRecord>) -> Self {
        Self { properties }
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
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
