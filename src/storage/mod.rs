//! Storage Module
//!
//! The key-value capability the executor runs against.
//!
//! ## Responsibilities
//! - Point reads and writes of string keys and values
//! - Enumerate the current key set
//! - Stay safe under concurrent readers and writers
//!
//! ## Concurrency Contract
//! - `set` calls are mutually exclusive with every other call
//! - `get`, `keys` and `snapshot` may run in parallel
//! - A `set` that returns before a read begins is visible to that read
//! - `keys` and `snapshot` each observe one consistent state of the map

mod memory;

pub use memory::MemStorage;

use crate::error::Result;

/// Storage backend used by the executor
///
/// Implementations must be safe to call from many threads at once. Absence
/// is reported as `SqlKvError::KeyNotFound`, never as an empty value.
pub trait Storage: Send + Sync {
    /// Get the value stored under `key` (byte-exact match)
    fn get(&self, key: &str) -> Result<String>;

    /// Insert or overwrite the value stored under `key`
    fn set(&self, key: String, value: String) -> Result<()>;

    /// All keys currently stored, in unspecified order
    fn keys(&self) -> Result<Vec<String>>;

    /// All pairs currently stored, in unspecified order
    ///
    /// The default reads each key separately after listing them, so it is
    /// only as consistent as a per-key scan. Backends that can read every
    /// pair atomically should override it.
    fn snapshot(&self) -> Result<Vec<(String, String)>> {
        self.keys()?
            .into_iter()
            .map(|key| {
                let value = self.get(&key)?;
                Ok((key, value))
            })
            .collect()
    }
}
