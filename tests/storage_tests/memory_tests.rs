//! MemStorage Tests
//!
//! Tests verify:
//! - Get/set semantics and overwrite behavior
//! - Absent keys report KeyNotFound
//! - Key enumeration and snapshots
//! - Concurrent writers and readers

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread;

use sqlkv::{MemStorage, SqlKvError, Storage};

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_storage_is_empty() {
    let storage = MemStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.len(), 0);
    assert!(storage.keys().unwrap().is_empty());
}

#[test]
fn test_set_and_get() {
    let storage = MemStorage::new();

    storage.set("key1".to_string(), "value1".to_string()).unwrap();

    assert_eq!(storage.get("key1").unwrap(), "value1");
    assert_eq!(storage.len(), 1);
}

#[test]
fn test_get_nonexistent_key() {
    let storage = MemStorage::new();

    let err = storage.get("nonexistent").unwrap_err();
    match err {
        SqlKvError::KeyNotFound { key } => assert_eq!(key, "nonexistent"),
        other => panic!("Expected KeyNotFound, got {:?}", other),
    }
}

#[test]
fn test_set_overwrites_existing() {
    let storage = MemStorage::new();

    storage.set("key1".to_string(), "value1".to_string()).unwrap();
    storage.set("key1".to_string(), "value2".to_string()).unwrap();

    assert_eq!(storage.len(), 1);
    assert_eq!(storage.get("key1").unwrap(), "value2");
}

#[test]
fn test_set_same_value_twice_is_idempotent() {
    let storage = MemStorage::new();

    storage.set("k".to_string(), "v".to_string()).unwrap();
    let once = storage.snapshot().unwrap();
    storage.set("k".to_string(), "v".to_string()).unwrap();
    let twice = storage.snapshot().unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_keys_are_case_sensitive() {
    let storage = MemStorage::new();

    storage.set("Key".to_string(), "upper".to_string()).unwrap();

    assert!(storage.get("key").unwrap_err().is_not_found());
    assert!(storage.get("Key ").unwrap_err().is_not_found());
    assert_eq!(storage.get("Key").unwrap(), "upper");
}

#[test]
fn test_empty_value_is_distinct_from_absent() {
    let storage = MemStorage::new();

    storage.set("empty".to_string(), String::new()).unwrap();

    assert_eq!(storage.get("empty").unwrap(), "");
    assert!(storage.get("other").unwrap_err().is_not_found());
}

#[test]
fn test_empty_key_is_a_valid_key() {
    let storage = MemStorage::new();

    storage.set(String::new(), "value".to_string()).unwrap();

    assert_eq!(storage.get("").unwrap(), "value");
}

// =============================================================================
// Enumeration Tests
// =============================================================================

#[test]
fn test_keys_returns_all_distinct_keys() {
    let storage = MemStorage::new();

    for i in 0..50 {
        storage.set(format!("key{}", i), format!("value{}", i)).unwrap();
    }

    let keys: HashSet<String> = storage.keys().unwrap().into_iter().collect();
    let expected: HashSet<String> = (0..50).map(|i| format!("key{}", i)).collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_keys_is_a_snapshot() {
    let storage = MemStorage::new();
    storage.set("a".to_string(), "1".to_string()).unwrap();

    let keys = storage.keys().unwrap();
    storage.set("b".to_string(), "2".to_string()).unwrap();

    assert_eq!(keys, vec!["a".to_string()]);
    assert_eq!(storage.keys().unwrap().len(), 2);
}

#[test]
fn test_snapshot_returns_all_pairs() {
    let storage = MemStorage::with_capacity(8);
    storage.set("a".to_string(), "1".to_string()).unwrap();
    storage.set("b".to_string(), "2".to_string()).unwrap();

    let pairs: HashMap<String, String> = storage.snapshot().unwrap().into_iter().collect();

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs["a"], "1");
    assert_eq!(pairs["b"], "2");
}

/// A backend that only implements the required methods
struct KeysThenGet(MemStorage);

impl Storage for KeysThenGet {
    fn get(&self, key: &str) -> sqlkv::Result<String> {
        self.0.get(key)
    }

    fn set(&self, key: String, value: String) -> sqlkv::Result<()> {
        self.0.set(key, value)
    }

    fn keys(&self) -> sqlkv::Result<Vec<String>> {
        self.0.keys()
    }
}

#[test]
fn test_default_snapshot_reads_every_key() {
    let storage = KeysThenGet(MemStorage::new());
    storage.set("x".to_string(), "9".to_string()).unwrap();
    storage.set("y".to_string(), "8".to_string()).unwrap();

    let mut pairs = storage.snapshot().unwrap();
    pairs.sort();

    assert_eq!(
        pairs,
        vec![
            ("x".to_string(), "9".to_string()),
            ("y".to_string(), "8".to_string()),
        ]
    );
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_writes_distinct_keys_no_lost_writes() {
    let storage = Arc::new(MemStorage::new());
    let num_threads = 8;
    let writes_per_thread = 250;

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let storage = Arc::clone(&storage);
            thread::spawn(move || {
                for i in 0..writes_per_thread {
                    storage
                        .set(format!("t{}-k{}", t, i), format!("{}", i))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let keys: HashSet<String> = storage.keys().unwrap().into_iter().collect();
    assert_eq!(keys.len(), num_threads * writes_per_thread);
    assert_eq!(storage.get("t3-k100").unwrap(), "100");
}

#[test]
fn test_concurrent_readers_and_writer() {
    let storage = MemStorage::new();
    storage.set("shared".to_string(), "0".to_string()).unwrap();

    crossbeam::thread::scope(|s| {
        s.spawn(|_| {
            for i in 1..=500 {
                storage.set("shared".to_string(), i.to_string()).unwrap();
            }
        });

        for _ in 0..4 {
            s.spawn(|_| {
                let mut last = 0;
                for _ in 0..500 {
                    // Values only ever increase, so a reader never sees one go back.
                    let seen: u32 = storage.get("shared").unwrap().parse().unwrap();
                    assert!(seen >= last);
                    last = seen;
                }
            });
        }
    })
    .unwrap();

    assert_eq!(storage.get("shared").unwrap(), "500");
}

#[test]
fn test_snapshot_never_sees_partial_batch() {
    let storage = MemStorage::new();

    crossbeam::thread::scope(|s| {
        s.spawn(|_| {
            for i in 0..200 {
                storage.set(format!("k{}", i), "v".to_string()).unwrap();
            }
        });

        s.spawn(|_| {
            let mut previous = 0;
            for _ in 0..200 {
                let len = storage.snapshot().unwrap().len();
                assert!(len >= previous);
                previous = len;
            }
        });
    })
    .unwrap();

    assert_eq!(storage.len(), 200);
}
