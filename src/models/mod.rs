//! Response models for the property service API
//!
//! DTOs serialized into HTTP response bodies.

pub mod responses;

pub use responses::{HealthResponse, PropertyListResponse};
