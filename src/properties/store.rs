//! Record Store Module
//!
//! Backing data sources for the property collection.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::model::PropertyRecord;
use crate::error::{Result, ServiceError};

/// Source of truth for property records.
///
/// `fetch_all` returns one consistent snapshot of every record; any failure
/// is reported as [`ServiceError::StoreUnavailable`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>>;
}

// == In-Memory Store ==
/// Fixed list of records held in process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<PropertyRecord>,
}

impl InMemoryRecordStore {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>> {
        Ok(self.records.clone())
    }
}

// == JSON File Store ==
/// Reads a JSON array of records from disk on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileRecordStore {
    path: PathBuf,
}

impl JsonFileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ServiceError::StoreUnavailable(format!("reading {}: {}", self.path.display(), e))
        })?;

        let records: Vec<PropertyRecord> = serde_json::from_str(&raw).map_err(|e| {
            ServiceError::StoreUnavailable(format!("parsing {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), count = records.len(), "Loaded property records");
        Ok(records)
    }
}
