//! Cache Store Module
//!
//! In-process cache engine: an LRU-ordered map of TTL entries plus lifetime
//! hit/miss counters.

use std::num::NonZeroUsize;

use lru::LruCache;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::{Result, ServiceError};

// == Cache Store ==
/// Bounded key-value store with per-entry TTL and LRU eviction.
#[derive(Debug)]
pub struct CacheStore {
    /// Entries in recency order
    entries: LruCache<String, CacheEntry>,
    /// Lifetime counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL in seconds applied when a caller passes none
    default_ttl: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a store holding at most `max_entries` entries (minimum one).
    pub fn new(max_entries: usize, default_ttl: u64) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::new(),
            max_entries: capacity.get(),
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a value, replacing any previous value and resetting its TTL.
    ///
    /// When the store is full, expired entries are purged first; if that frees
    /// nothing, the least recently used entry is evicted.
    pub fn set(&mut self, key: String, value: String, ttl: Option<u64>) -> Result<()> {
        if key.is_empty() {
            return Err(ServiceError::InvalidRequest(
                "Key cannot be empty".to_string(),
            ));
        }

        if key.len() > MAX_KEY_LENGTH {
            return Err(ServiceError::InvalidRequest(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if value.len() > MAX_VALUE_SIZE {
            return Err(ServiceError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let is_overwrite = self.entries.contains(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            self.cleanup_expired();
        }

        if !is_overwrite && self.entries.len() >= self.max_entries {
            // Capacity is at least one, so a full store always has an LRU entry
            if self.entries.pop_lru().is_some() {
                self.stats.record_eviction();
            }
        }

        let effective_ttl = Some(ttl.unwrap_or(self.default_ttl));
        self.entries.put(key, CacheEntry::new(value, effective_ttl));
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Returns the live value for `key`, counting the lookup as a hit or miss.
    ///
    /// An expired entry is dropped on sight and counts as a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let expired = self.entries.peek(key).map(CacheEntry::is_expired);

        match expired {
            Some(false) => {
                self.stats.record_hit();
                self.entries.get(key).map(|entry| entry.value.clone())
            }
            Some(true) => {
                self.entries.pop(key);
                self.stats.record_expired(1);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes `key`. Returns whether an entry was present.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.pop(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Snapshot of the lifetime counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Drops every expired entry and returns how many were removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.pop(key);
        }

        self.stats.record_expired(expired_keys.len());
        self.stats.set_total_entries(self.entries.len());
        expired_keys.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
