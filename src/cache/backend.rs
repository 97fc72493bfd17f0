//! Cache Backend Module
//!
//! The contract the collection cache and metrics probe consume, and the
//! shared handle over the in-process [`CacheStore`] that implements it.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

/// Backend-global lifetime counters, as reported by the backend itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BackendStats {
    pub hits: u64,
    pub misses: u64,
}

impl From<&CacheStats> for BackendStats {
    fn from(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
        }
    }
}

/// Key-value cache with TTL and a stats interface.
///
/// Implementations own TTL enforcement, eviction and the atomicity of
/// individual `get`/`set` calls. Values are opaque serialized strings.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Returns the live value for `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key` for `ttl_seconds`, replacing any previous value.
    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()>;

    /// Lifetime hit and miss counters across every key.
    async fn stats_snapshot(&self) -> Result<BackendStats>;
}

// == Shared Cache Store ==
/// Cloneable handle to one [`CacheStore`] shared by every caller.
#[derive(Debug, Clone)]
pub struct SharedCacheStore {
    inner: Arc<RwLock<CacheStore>>,
}

impl SharedCacheStore {
    pub fn new(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates an empty store with the given capacity and default TTL.
    pub fn with_capacity(max_entries: usize, default_ttl: u64) -> Self {
        Self::new(CacheStore::new(max_entries, default_ttl))
    }

    /// Direct access to the underlying lock, for maintenance tasks and tests.
    pub fn store(&self) -> &Arc<RwLock<CacheStore>> {
        &self.inner
    }

    /// Full counter set, including evictions and entry count.
    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    /// Removes `key` ahead of its TTL. Returns whether it was present.
    pub async fn evict(&self, key: &str) -> bool {
        self.inner.write().await.delete(key)
    }

    /// Drops expired entries and returns how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }
}

#[async_trait]
impl CacheBackend for SharedCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // Write lock: lookups update recency and counters
        Ok(self.inner.write().await.get(key))
    }

    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()> {
        self.inner
            .write()
            .await
            .set(key.to_string(), value, Some(ttl_seconds))
    }

    async fn stats_snapshot(&self) -> Result<BackendStats> {
        let stats = self.inner.read().await.stats();
        Ok(BackendStats::from(&stats))
    }
}
