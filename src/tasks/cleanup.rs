//! TTL Cleanup Task
//!
//! Background task that periodically removes expired entries from every
//! cache tier.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCacheStore;

/// Spawns a background task that purges expired entries from each tier.
///
/// Reads already treat expired entries as absent; this only reclaims their
/// memory. Abort the returned handle to stop the task during shutdown.
///
/// # Example
/// ```ignore
/// let handle = spawn_cleanup_task(state.cache_tiers(), 1);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task(
    tiers: Vec<SharedCacheStore>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task for {} cache tier(s) every {} seconds",
            tiers.len(),
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let mut removed = 0;
            for tier in &tiers {
                removed += tier.cleanup_expired().await;
            }

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
