//! Cache Module
//!
//! In-process TTL cache with LRU eviction and lifetime hit/miss counters,
//! exposed to the rest of the service through the [`CacheBackend`] trait.

mod backend;
mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use backend::{BackendStats, CacheBackend, SharedCacheStore};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 16 * 1024 * 1024; // 16 MB
