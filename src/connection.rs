//! Connection Handle
//!
//! The entry point callers issue command strings against.
//!
//! ## Responsibilities
//! - Check the caller's context once at entry
//! - Match the query against the connection's grammar
//! - Execute it against the connection's storage
//! - Refuse unsupported surface (prepared statements, transactions)

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::{Config, ScanConsistency};
use crate::context::Context;
use crate::cursor::Rows;
use crate::error::{Result, SqlKvError};
use crate::executor::{execute, Outcome};
use crate::protocol::Grammar;
use crate::storage::Storage;

/// A handle bound to one storage instance for its lifetime
///
/// `Connection` is `Send + Sync`; share it across threads behind an `Arc`.
/// Every call runs to completion on the caller's thread.
pub struct Connection {
    /// Opaque name given at open (logging only)
    name: String,

    /// Backend all commands run against
    storage: Arc<dyn Storage>,

    /// Rule table used to classify queries
    grammar: Arc<Grammar>,

    /// Full scan consistency level
    scan_consistency: ScanConsistency,

    /// Set by `close`
    closed: AtomicBool,
}

impl Connection {
    /// Create a connection over an existing storage and grammar
    pub fn new(
        name: impl Into<String>,
        storage: Arc<dyn Storage>,
        grammar: Arc<Grammar>,
        scan_consistency: ScanConsistency,
    ) -> Self {
        let name = name.into();
        tracing::debug!(name = %name, grammar = %grammar.name(), "Connection opened");

        Self {
            name,
            storage,
            grammar,
            scan_consistency,
            closed: AtomicBool::new(false),
        }
    }

    /// Create a connection over a caller-supplied backend
    ///
    /// The grammar comes from `config.dialect`.
    pub fn with_storage(
        name: impl Into<String>,
        storage: Arc<dyn Storage>,
        config: &Config,
    ) -> Result<Self> {
        let grammar = Arc::new(config.dialect.grammar()?);
        Ok(Self::new(name, storage, grammar, config.scan_consistency))
    }

    /// Execute a command, discarding any rows it produces
    ///
    /// Errors from reads (e.g. `KeyNotFound`) are still returned.
    pub fn execute(&self, ctx: &Context, query: &str) -> Result<()> {
        self.run(ctx, query).map(|_| ())
    }

    /// Run a command and return a cursor over its rows
    ///
    /// A write yields an empty cursor with no columns.
    pub fn query(&self, ctx: &Context, query: &str) -> Result<Rows> {
        match self.run(ctx, query)? {
            Outcome::Rows(result) => Ok(result.into_rows()),
            Outcome::Ack => Ok(Rows::empty()),
        }
    }

    /// Prepared statements are not supported
    pub fn prepare(&self, _query: &str) -> Result<Infallible> {
        Err(SqlKvError::NotImplemented("prepared statements"))
    }

    /// Transactions are not supported
    pub fn begin(&self) -> Result<Infallible> {
        Err(SqlKvError::NotImplemented("transactions"))
    }

    /// Close the connection
    ///
    /// Later calls fail with `ConnectionClosed`. Cursors already returned
    /// own their rows and stay readable.
    pub fn close(&self) -> Result<()> {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!(name = %self.name, "Connection closed");
        }
        Ok(())
    }

    fn run(&self, ctx: &Context, query: &str) -> Result<Outcome> {
        if self.is_closed() {
            return Err(SqlKvError::ConnectionClosed);
        }
        ctx.check()?;

        let command = self.grammar.match_command(query)?;
        execute(
            command,
            self.storage.as_ref(),
            self.grammar.columns(),
            self.scan_consistency,
        )
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn scan_consistency(&self) -> ScanConsistency {
        self.scan_consistency
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}
