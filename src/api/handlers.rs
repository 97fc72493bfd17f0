//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::cache::{CacheBackend, SharedCacheStore};
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, PropertyListResponse};
use crate::properties::{
    CacheMetricsProbe, CacheStatsSnapshot, CollectionCache, InMemoryRecordStore,
    JsonFileRecordStore, RecordStore,
};

use super::response_cache::ResponseCache;

/// Application state shared across all handlers.
///
/// Holds the two cache tiers separately: `backend` feeds the collection
/// cache and the metrics probe, `response_cache` wraps whole HTTP responses.
#[derive(Clone)]
pub struct AppState {
    pub collection: CollectionCache,
    pub metrics: CacheMetricsProbe,
    pub backend: SharedCacheStore,
    pub response_cache: ResponseCache,
}

impl AppState {
    /// Wires the collection cache and probe over `backend`, reading records from `store`.
    pub fn new(backend: SharedCacheStore, store: Arc<dyn RecordStore>, config: &Config) -> Self {
        let shared: Arc<dyn CacheBackend> = Arc::new(backend.clone());
        let response_cache = ResponseCache::new(
            SharedCacheStore::with_capacity(config.max_entries, config.response_cache_ttl),
            config.response_cache_ttl,
        );

        Self {
            collection: CollectionCache::new(shared.clone(), store)
                .with_ttl(config.collection_ttl),
            metrics: CacheMetricsProbe::new(shared),
            backend,
            response_cache,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Records come from `PROPERTIES_FILE` when set, otherwise from an empty
    /// in-memory store.
    pub fn from_config(config: &Config) -> Self {
        let store: Arc<dyn RecordStore> = match &config.properties_file {
            Some(path) => Arc::new(JsonFileRecordStore::new(path.clone())),
            None => Arc::new(InMemoryRecordStore::default()),
        };
        let backend = SharedCacheStore::with_capacity(config.max_entries, config.collection_ttl);
        Self::new(backend, store, config)
    }

    /// Every cache tier, for maintenance tasks.
    pub fn cache_tiers(&self) -> Vec<SharedCacheStore> {
        vec![self.backend.clone(), self.response_cache.store().clone()]
    }
}

/// Handler for GET /properties
///
/// Lists every property. Store failures surface as a 500.
pub async fn list_properties_handler(
    State(state): State<AppState>,
) -> Result<Json<PropertyListResponse>> {
    let properties = state.collection.get_all_properties().await?;
    Ok(Json(PropertyListResponse::new(properties)))
}

/// Handler for GET /metrics/cache
///
/// Always 200; a backend failure shows up in the `error` field.
pub async fn cache_metrics_handler(State(state): State<AppState>) -> Json<CacheStatsSnapshot> {
    Json(state.metrics.get_cache_metrics().await)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
