//! Executor Module
//!
//! Runs a matched command against a storage backend.
//!
//! ## Responsibilities
//! - Route each command to the storage operation it names
//! - Build result sets for reads
//! - Propagate every failure unchanged (no retries, no swallowing)

use crate::config::ScanConsistency;
use crate::cursor::ResultSet;
use crate::error::{Result, SqlKvError};
use crate::protocol::{Columns, Command};
use crate::storage::Storage;

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A write was applied
    Ack,

    /// A read produced rows
    Rows(ResultSet),
}

/// Execute a command
///
/// `columns` supplies the dialect's headers. Only `Command::Write` mutates
/// the store.
pub fn execute(
    command: Command,
    storage: &dyn Storage,
    columns: &Columns,
    scan: ScanConsistency,
) -> Result<Outcome> {
    tracing::trace!(?command, "Executing command");

    match command {
        Command::Write { key, value } => {
            storage.set(key, value)?;
            Ok(Outcome::Ack)
        }
        Command::ReadOne { key } => {
            let value = storage.get(&key)?;
            let mut result = ResultSet::new(columns.lookup.clone());
            result.push_row(vec![value])?;
            Ok(Outcome::Rows(result))
        }
        Command::ReadAll => scan_all(storage, columns, scan).map(Outcome::Rows),
        Command::Unrecognized { raw } => Err(SqlKvError::QueryNotMatched { query: raw }),
    }
}

/// Full scan
///
/// With `ScanConsistency::PerKey` the key set is a snapshot but each value
/// is read fresh, so an overwrite that lands mid-scan may be observed. A
/// failed per-key read fails the whole scan.
fn scan_all(storage: &dyn Storage, columns: &Columns, scan: ScanConsistency) -> Result<ResultSet> {
    let mut result = ResultSet::new(columns.scan.clone());

    match scan {
        ScanConsistency::PerKey => {
            for key in storage.keys()? {
                let value = storage.get(&key)?;
                result.push_row(vec![key, value])?;
            }
        }
        ScanConsistency::Snapshot => {
            for (key, value) in storage.snapshot()? {
                result.push_row(vec![key, value])?;
            }
        }
    }

    Ok(result)
}
