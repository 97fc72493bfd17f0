//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// TTL of the cached property collection, in seconds (one hour).
pub const DEFAULT_COLLECTION_TTL: u64 = 3600;

/// TTL of cached HTTP responses, in seconds (fifteen minutes).
pub const DEFAULT_RESPONSE_CACHE_TTL: u64 = 15 * 60;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of entries each cache tier can hold
    pub max_entries: usize,
    /// TTL in seconds for the cached property collection
    pub collection_ttl: u64,
    /// TTL in seconds for cached HTTP responses
    pub response_cache_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// JSON file holding the property records; None serves an empty listing
    pub properties_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MAX_ENTRIES` - Maximum entries per cache tier (default: 1000)
    /// - `COLLECTION_TTL` - Collection cache TTL in seconds (default: 3600)
    /// - `RESPONSE_CACHE_TTL` - Response cache TTL in seconds (default: 900)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    /// - `PROPERTIES_FILE` - Path to a JSON array of property records (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            collection_ttl: parse_var("COLLECTION_TTL").unwrap_or(defaults.collection_ttl),
            response_cache_ttl: parse_var("RESPONSE_CACHE_TTL")
                .unwrap_or(defaults.response_cache_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            properties_file: env::var("PROPERTIES_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            max_entries: 1000,
            collection_ttl: DEFAULT_COLLECTION_TTL,
            response_cache_ttl: DEFAULT_RESPONSE_CACHE_TTL,
            cleanup_interval: 1,
            properties_file: None,
        }
    }
}
