//! Configuration for sqlkv
//!
//! Centralized configuration with sensible defaults.

use crate::protocol::Dialect;

/// Main configuration for a sqlkv connection
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Command dialect accepted by connections
    pub dialect: Dialect,

    // -------------------------------------------------------------------------
    // Execution Configuration
    // -------------------------------------------------------------------------
    /// How full scans read values
    pub scan_consistency: ScanConsistency,

    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Initial capacity of the in-memory map (number of keys)
    pub initial_capacity: usize,
}

/// Consistency level of a full scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanConsistency {
    /// Snapshot the key set, then read each key under its own shared lock.
    /// A concurrent overwrite may be observed mid-scan.
    #[default]
    PerKey,

    /// Read every pair under a single shared lock
    Snapshot,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::Terse,
            scan_consistency: ScanConsistency::PerKey,
            initial_capacity: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the command dialect
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.config.dialect = dialect;
        self
    }

    /// Set the full scan consistency level
    pub fn scan_consistency(mut self, consistency: ScanConsistency) -> Self {
        self.config.scan_consistency = consistency;
        self
    }

    /// Set the initial map capacity
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
