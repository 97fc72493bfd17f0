//! Property Cache - property listing service with a read-through cache
//!
//! Serves the full property collection from a shared cache backend, falling
//! back to the record store on a miss, and reports the backend hit ratio.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod properties;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, ServiceError};
pub use properties::{CacheMetricsProbe, CacheStatsSnapshot, CollectionCache, PropertyRecord};
pub use tasks::spawn_cleanup_task;
