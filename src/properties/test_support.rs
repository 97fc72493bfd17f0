//! Shared fixtures for the property module tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use super::model::PropertyRecord;
use super::store::RecordStore;
use crate::error::{Result, ServiceError};

pub fn sample_records() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            id: 1,
            title: "Harbour View Apartment".to_string(),
            description: "Two bedrooms over the marina".to_string(),
            price: "425000.00".parse().unwrap(),
            location: "Porto".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap(),
        },
        PropertyRecord {
            id: 2,
            title: "Farmhouse".to_string(),
            description: "Restored barn with orchard".to_string(),
            price: "310500.50".parse().unwrap(),
            location: "Alentejo".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 2, 20, 17, 45, 30).unwrap(),
        },
    ]
}

/// Record store that counts fetches and can be told to fail.
#[derive(Debug, Default)]
pub struct CountingStore {
    records: Vec<PropertyRecord>,
    fetches: AtomicUsize,
    failure: Mutex<Option<String>>,
}

impl CountingStore {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }
}

#[async_trait]
impl RecordStore for CountingStore {
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let failure = self.failure.lock().unwrap().clone();
        match failure {
            Some(message) => Err(ServiceError::StoreUnavailable(message)),
            None => Ok(self.records.clone()),
        }
    }
}
