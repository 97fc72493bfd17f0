//! API Module
//!
//! HTTP handlers and routing for the property service.
//!
//! # Endpoints
//! - `GET /properties` - All properties as `{"properties": [...]}`
//! - `GET /metrics/cache` - Cache hit/miss counters and hit ratio
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod response_cache;
pub mod routes;

pub use handlers::*;
pub use response_cache::{cache_response, ResponseCache, X_CACHE};
pub use routes::create_router;
