//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store's counters, capacity and recency rules
//! over arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::{CacheBackend, CacheStore, SharedCacheStore};

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;
const TEST_DEFAULT_TTL: u64 = 300;

// == Strategies ==
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,256}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // Small key space so gets and deletes actually land on stored keys
    let key = "[a-e]{1,2}";
    prop_oneof![
        (key, valid_value_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        key.prop_map(|key| CacheOp::Get { key }),
        key.prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every get is counted exactly once, as a hit or as a miss.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_DEFAULT_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key, value, None).unwrap();
                }
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Delete { key } => {
                    store.delete(&key);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }

    // A later set wholly replaces an earlier one.
    #[test]
    fn prop_overwrite_replaces_value(
        key in valid_key_strategy(),
        first in valid_value_strategy(),
        second in valid_value_strategy(),
    ) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_DEFAULT_TTL);

        store.set(key.clone(), first, None).unwrap();
        store.set(key.clone(), second.clone(), None).unwrap();

        prop_assert_eq!(store.get(&key), Some(second));
        prop_assert_eq!(store.len(), 1);
    }

    // The store never holds more than its capacity, and counts what it drops.
    #[test]
    fn prop_capacity_enforcement(
        capacity in 1usize..20,
        keys in prop::collection::vec(valid_key_strategy(), 1..60),
    ) {
        let mut store = CacheStore::new(capacity, TEST_DEFAULT_TTL);
        // Reference model: oldest first
        let mut model: Vec<String> = Vec::new();
        let mut expected_evictions: u64 = 0;

        for key in keys {
            if let Some(pos) = model.iter().position(|k| *k == key) {
                model.remove(pos);
            } else if model.len() == capacity {
                model.remove(0);
                expected_evictions += 1;
            }
            model.push(key.clone());

            store.set(key, "v".to_string(), None).unwrap();
            prop_assert!(store.len() <= capacity);
        }

        prop_assert_eq!(store.len(), model.len());
        prop_assert_eq!(store.stats().evictions, expected_evictions);
    }

    // With distinct keys inserted in order, exactly the newest `capacity` survive.
    #[test]
    fn prop_lru_eviction_order(
        keys in prop::collection::hash_set(valid_key_strategy(), 2..30),
        capacity in 1usize..10,
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut store = CacheStore::new(capacity, TEST_DEFAULT_TTL);

        for key in &keys {
            store.set(key.clone(), "v".to_string(), None).unwrap();
        }

        let survivors = keys.len().min(capacity);
        let (evicted, kept) = keys.split_at(keys.len() - survivors);
        for key in kept {
            prop_assert!(store.get(key).is_some(), "{} should survive", key);
        }
        for key in evicted {
            prop_assert!(store.get(key).is_none(), "{} should be evicted", key);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Concurrent readers through the shared handle only ever see a complete
    // value that some writer stored.
    #[test]
    fn prop_concurrent_operation_correctness(
        values in prop::collection::vec(valid_value_strategy(), 1..10),
        readers in 1usize..20,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let backend = SharedCacheStore::with_capacity(TEST_MAX_ENTRIES, TEST_DEFAULT_TTL);
            let written: HashSet<String> = values.iter().cloned().collect();

            let mut handles = Vec::new();
            for value in values.clone() {
                let backend = backend.clone();
                handles.push(tokio::spawn(async move {
                    backend.set("shared", value, 60).await.map(|_| None)
                }));
            }
            for _ in 0..readers {
                let backend = backend.clone();
                handles.push(tokio::spawn(async move { backend.get("shared").await }));
            }

            for handle in handles {
                let seen = handle.await.expect("task should not panic").unwrap();
                if let Some(value) = seen {
                    prop_assert!(written.contains(&value), "read a value nobody wrote");
                }
            }

            let final_value = backend.get("shared").await.unwrap();
            prop_assert!(final_value.map(|v| written.contains(&v)).unwrap_or(false));

            let stats = backend.stats().await;
            prop_assert_eq!(stats.hits + stats.misses, readers as u64 + 1);
            Ok(())
        })?;
    }
}
