//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_metrics_handler, health_handler, list_properties_handler, AppState,
};
use super::response_cache::cache_response;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /properties` - Property listing, behind the response cache tier
/// - `GET /metrics/cache` - Collection cache hit ratio
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let response_tier =
        middleware::from_fn_with_state(state.response_cache.clone(), cache_response);

    Router::new()
        .route(
            "/properties",
            get(list_properties_handler).layer(response_tier),
        )
        .route("/metrics/cache", get(cache_metrics_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SharedCacheStore;
    use crate::config::Config;
    use crate::properties::InMemoryRecordStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(
            SharedCacheStore::with_capacity(100, 3600),
            Arc::new(InMemoryRecordStore::default()),
            &Config::default(),
        );
        create_router(state)
    }

    async fn status_of(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_properties_endpoint() {
        assert_eq!(status_of("/properties").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        assert_eq!(status_of("/metrics/cache").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        assert_eq!(status_of("/set").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_properties_rejects_post() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/properties")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
