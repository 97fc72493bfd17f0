//! Cache Metrics Probe
//!
//! Derives a hit ratio from the cache backend's lifetime counters.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::cache::CacheBackend;

/// Point-in-time read of the backend counters.
///
/// When the backend could not be queried the counters are zero and `error`
/// carries the reason; the probe itself never fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    /// Percentage, rounded to two decimals
    pub hit_ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CacheStatsSnapshot {
    pub fn from_counts(hits: u64, misses: u64) -> Self {
        Self {
            hits,
            misses,
            hit_ratio: hit_ratio_percent(hits, misses),
            error: None,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            hits: 0,
            misses: 0,
            hit_ratio: 0.0,
            error: Some(reason.into()),
        }
    }
}

/// `hits / (hits + misses) * 100`, rounded to two decimals; 0 with no lookups.
pub fn hit_ratio_percent(hits: u64, misses: u64) -> f64 {
    let total = hits as f64 + misses as f64;
    if total == 0.0 {
        return 0.0;
    }
    let ratio = hits as f64 / total * 100.0;
    (ratio * 100.0).round() / 100.0
}

// == Cache Metrics Probe ==
#[derive(Clone)]
pub struct CacheMetricsProbe {
    backend: Arc<dyn CacheBackend>,
}

impl CacheMetricsProbe {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    /// Reads the backend counters. Failures are logged and reported in-band.
    pub async fn get_cache_metrics(&self) -> CacheStatsSnapshot {
        match self.backend.stats_snapshot().await {
            Ok(stats) => {
                let snapshot = CacheStatsSnapshot::from_counts(stats.hits, stats.misses);
                info!(
                    hits = snapshot.hits,
                    misses = snapshot.misses,
                    hit_ratio = snapshot.hit_ratio,
                    "Cache metrics"
                );
                snapshot
            }
            Err(e) => {
                error!("Error retrieving cache metrics: {}", e);
                CacheStatsSnapshot::unavailable(e.to_string())
            }
        }
    }
}
