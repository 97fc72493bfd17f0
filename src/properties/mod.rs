//! Properties Module
//!
//! The property collection, where it comes from, and how it is cached.
//!
//! - [`CollectionCache`]: read-through cache for the full collection
//! - [`CacheMetricsProbe`]: hit ratio derived from the backend counters
//! - [`RecordStore`]: the backing data source

mod collection;
mod metrics;
mod model;
mod store;

#[cfg(test)]
mod test_support;

pub use collection::{CollectionCache, ALL_PROPERTIES_KEY};
pub use metrics::{hit_ratio_percent, CacheMetricsProbe, CacheStatsSnapshot};
pub use model::{ParsePriceError, Price, PropertyRecord};
pub use store::{InMemoryRecordStore, JsonFileRecordStore, RecordStore};
