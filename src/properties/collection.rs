//! Collection Cache Module
//!
//! Read-through caching of the full property collection under one
//! well-known key.

use std::sync::Arc;

use tracing::{info, warn};

use super::model::PropertyRecord;
use super::store::RecordStore;
use crate::cache::CacheBackend;
use crate::config::DEFAULT_COLLECTION_TTL;
use crate::error::Result;

/// Cache key shared by every reader of the property collection.
pub const ALL_PROPERTIES_KEY: &str = "all_properties";

// == Collection Cache ==
/// Serves the whole property collection from the cache backend, falling
/// back to the record store on a miss.
///
/// The cached value is always a complete snapshot, replaced wholesale.
/// Concurrent misses may each hit the store and overwrite the key; the
/// last write wins and every writer stores the same logical collection.
#[derive(Clone)]
pub struct CollectionCache {
    backend: Arc<dyn CacheBackend>,
    store: Arc<dyn RecordStore>,
    ttl_seconds: u64,
}

impl CollectionCache {
    /// Creates a collection cache with the default one hour TTL.
    pub fn new(backend: Arc<dyn CacheBackend>, store: Arc<dyn RecordStore>) -> Self {
        Self {
            backend,
            store,
            ttl_seconds: DEFAULT_COLLECTION_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl_seconds: u64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    // == Get All Properties ==
    /// Returns every property record.
    ///
    /// Hit: the cached snapshot, untouched. Miss: a fresh fetch from the
    /// record store, written back under [`ALL_PROPERTIES_KEY`] before it is
    /// returned. A store failure is propagated and nothing is written. A
    /// write-back the backend refuses is logged and the records are served
    /// uncached.
    pub async fn get_all_properties(&self) -> Result<Vec<PropertyRecord>> {
        if let Some(cached) = self.backend.get(ALL_PROPERTIES_KEY).await? {
            match serde_json::from_str::<Vec<PropertyRecord>>(&cached) {
                Ok(records) => {
                    info!(count = records.len(), "Properties retrieved from cache");
                    return Ok(records);
                }
                Err(e) => {
                    warn!("Discarding undecodable cached collection: {}", e);
                }
            }
        }

        let records = self.store.fetch_all().await?;
        info!(count = records.len(), "Properties retrieved from store");

        let encoded = serde_json::to_string(&records)?;
        if let Err(e) = self
            .backend
            .set(ALL_PROPERTIES_KEY, encoded, self.ttl_seconds)
            .await
        {
            warn!("Failed to cache property collection: {}", e);
        }

        Ok(records)
    }
}
