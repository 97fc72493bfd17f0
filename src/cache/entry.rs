//! Cache Entry Module
//!
//! A stored value plus the instant it stops being visible.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single cached value with its expiry deadline.
///
/// Deadlines use tokio's clock so tests can drive expiry with
/// `tokio::time::advance` instead of sleeping.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value (already serialized by the caller)
    pub value: String,
    /// Deadline after which the entry is gone, None = no expiry
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl_seconds` from now.
    ///
    /// A TTL of `None`, or one too large for the clock to represent, keeps
    /// the entry until it is evicted or overwritten.
    pub fn new(value: String, ttl_seconds: Option<u64>) -> Self {
        let now = Instant::now();
        Self {
            value,
            expires_at: ttl_seconds.and_then(|ttl| now.checked_add(Duration::from_secs(ttl))),
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches its deadline.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Same as [`is_expired`](Self::is_expired) against a caller-supplied instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        matches!(self.expires_at, Some(deadline) if now >= deadline)
    }
}
