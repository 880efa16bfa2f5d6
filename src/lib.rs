//! # sqlkv
//!
//! An embeddable in-memory key-value store driven by a pseudo-SQL protocol:
//! - Two command dialects (terse and SQL-shaped) on one grammar engine
//! - Readers-writer locked storage behind a swappable `Storage` trait
//! - Forward-only row cursors for read results
//! - Entry-time cancellation and deadlines
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Connection (Driver::open)                  │
//! │                 execute / query / close                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ command string
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Grammar                                │
//! │          (ordered regex rules, first match wins)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Executor                               │
//! └──────────┬───────────────────────────────────┬──────────────┘
//!            │                                   │
//!            ▼                                   ▼
//!   ┌─────────────────┐                 ┌─────────────────┐
//!   │    Storage      │                 │      Rows       │
//!   │    (RwLock)     │                 │    (cursor)     │
//!   └─────────────────┘                 └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use sqlkv::{Config, Context, Dialect, Driver};
//!
//! let driver = Driver::from_config(Config::builder().dialect(Dialect::Terse).build())?;
//! let conn = driver.open("")?;
//! let ctx = Context::background();
//!
//! conn.execute(&ctx, "SET a = 1;")?;
//! let mut rows = conn.query(&ctx, "GET a;")?;
//! assert_eq!(rows.columns(), ["value"]);
//! assert_eq!(rows.advance(), Some(vec!["1".to_string()]));
//! # Ok::<(), sqlkv::SqlKvError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod context;

pub mod storage;
pub mod protocol;
pub mod cursor;
pub mod executor;
pub mod connection;
pub mod driver;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, SqlKvError};
pub use config::{Config, ScanConsistency};
pub use context::Context;
pub use storage::{MemStorage, Storage};
pub use protocol::{Command, Dialect, Grammar};
pub use cursor::{ResultSet, Rows};
pub use connection::Connection;
pub use driver::Driver;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of sqlkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
