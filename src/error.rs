//! Error types for sqlkv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using SqlKvError
pub type Result<T> = std::result::Result<T, SqlKvError>;

/// Unified error type for sqlkv operations
#[derive(Debug, Error)]
pub enum SqlKvError {
    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Key not found: {key:?}")]
    KeyNotFound { key: String },

    #[error("Storage error: {0}")]
    Storage(String),

    // -------------------------------------------------------------------------
    // Matching Errors
    // -------------------------------------------------------------------------
    #[error("Query not matched: {query:?}")]
    QueryNotMatched { query: String },

    /// A rule matched but did not capture every group its kind declares.
    #[error("Malformed match for rule '{rule}' on {query:?}: captured {captures:?}")]
    MalformedMatch {
        rule: String,
        query: String,
        captures: Vec<(String, Option<String>)>,
    },

    #[error("Grammar error: {0}")]
    Grammar(String),

    // -------------------------------------------------------------------------
    // Result Errors
    // -------------------------------------------------------------------------
    #[error("Column count mismatch: expected {expected}, got {actual}")]
    ColumnMismatch { expected: usize, actual: usize },

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Operation cancelled")]
    Cancelled,

    #[error("Deadline exceeded")]
    DeadlineExceeded,

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Connection closed")]
    ConnectionClosed,

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SqlKvError {
    /// True when the error reports an absent key
    pub fn is_not_found(&self) -> bool {
        matches!(self, SqlKvError::KeyNotFound { .. })
    }
}

impl From<regex::Error> for SqlKvError {
    fn from(e: regex::Error) -> Self {
        SqlKvError::Grammar(e.to_string())
    }
}
