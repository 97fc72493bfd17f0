//! Cache Statistics Module
//!
//! Lifetime counters kept by the in-memory store, in the spirit of the
//! `keyspace_hits` / `keyspace_misses` section of a Redis `INFO stats` reply.

use serde::Serialize;

// == Cache Stats ==
/// Store-wide counters. They only grow; nothing resets them while the
/// process lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups that found a live entry
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Entries dropped to make room under the capacity limit
    pub evictions: u64,
    /// Entries removed because their TTL elapsed
    pub expired: u64,
    /// Live entry count at the time of the read
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expired(&mut self, count: usize) {
        self.expired += count as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
