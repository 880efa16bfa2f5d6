//! In-memory storage
//!
//! HashMap-based store with a single RwLock for concurrency.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{Result, SqlKvError};
use super::Storage;

/// In-memory key-value store
///
/// ## Concurrency:
/// - `data`: one RwLock over the whole map
/// - `set` holds the write lock; every read holds the read lock
/// - No lock is held between calls
pub struct MemStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemStorage {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new empty store with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStorage {
    fn get(&self, key: &str) -> Result<String> {
        self.data
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| SqlKvError::KeyNotFound {
                key: key.to_string(),
            })
    }

    fn set(&self, key: String, value: String) -> Result<()> {
        self.data.write().insert(key, value);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.data.read().keys().cloned().collect())
    }

    fn snapshot(&self) -> Result<Vec<(String, String)>> {
        let data = self.data.read();
        Ok(data
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
