//! Protocol Module
//!
//! Defines the textual command protocol.
//!
//! ## Dialects
//! - Terse: `SET k = v;`, `GET k;`, `KEYS;`
//! - SQL: `INSERT INTO memtable (id, value) VALUES ('k', 'v');`,
//!   `SELECT value FROM memtable WHERE id='k';`, `SELECT * FROM memtable;`
//!
//! Terse keywords are case-sensitive. SQL keywords and identifiers are
//! case-insensitive; quoted literals are not. Every statement ends with `;`.
//!
//! ## Matching
//! Each dialect is a `Grammar`: an ordered table of `Rule`s tried
//! first-match-wins. Input matching no rule becomes `Command::Unrecognized`.

mod command;
mod grammar;
mod codec;

pub use command::{Command, CommandKind};
pub use grammar::{Columns, Dialect, Grammar, Rule};
pub use codec::render_command;
