//! Driver
//!
//! Explicit factory for connections. There is no global registry: callers
//! build a `Driver` from a grammar or a `Config` and open connections from
//! it.

use std::sync::Arc;

use crate::config::{Config, ScanConsistency};
use crate::connection::Connection;
use crate::error::Result;
use crate::protocol::Grammar;
use crate::storage::MemStorage;

/// Opens connections that share a grammar
pub struct Driver {
    grammar: Arc<Grammar>,
    scan_consistency: ScanConsistency,
    initial_capacity: usize,
}

impl Driver {
    /// Create a driver for the given grammar with default settings
    pub fn new(grammar: Grammar) -> Self {
        let defaults = Config::default();
        Self {
            grammar: Arc::new(grammar),
            scan_consistency: defaults.scan_consistency,
            initial_capacity: defaults.initial_capacity,
        }
    }

    /// Create a driver from a config (compiles the dialect's grammar)
    pub fn from_config(config: Config) -> Result<Self> {
        Ok(Self {
            grammar: Arc::new(config.dialect.grammar()?),
            scan_consistency: config.scan_consistency,
            initial_capacity: config.initial_capacity,
        })
    }

    /// Set the full scan consistency of connections opened later
    pub fn scan_consistency(mut self, consistency: ScanConsistency) -> Self {
        self.scan_consistency = consistency;
        self
    }

    /// Open a connection backed by a fresh in-memory store
    ///
    /// `name` is opaque. Each connection gets its own store, which is
    /// dropped with the connection.
    pub fn open(&self, name: &str) -> Result<Connection> {
        let storage = Arc::new(MemStorage::with_capacity(self.initial_capacity));
        Ok(Connection::new(
            name,
            storage,
            Arc::clone(&self.grammar),
            self.scan_consistency,
        ))
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }
}
