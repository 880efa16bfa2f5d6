//! Protocol codec
//!
//! Renders commands into their canonical command strings. Decoding is the
//! grammar's job (`Grammar::match_command`).
//!
//! ## Wire Format
//!
//! ### Terse Dialect
//! ```text
//! Write    SET <key> = <value>;
//! ReadOne  GET <key>;
//! ReadAll  KEYS;
//! ```
//!
//! ### SQL Dialect
//! ```text
//! Write    INSERT INTO memtable (id, value) VALUES ('<key>', '<value>');
//! ReadOne  SELECT value FROM memtable WHERE id='<key>';
//! ReadAll  SELECT * FROM memtable;
//! ```
//!
//! Rendered strings match the dialect's grammar again for any key the
//! grammar accepts: terse keys contain no whitespace, `=` or `;`, and SQL
//! keys contain no `'`. Values are unrestricted.

use super::{Command, Dialect};

/// Render a command in the given dialect
///
/// `Command::Unrecognized` renders as its raw text.
pub fn render_command(dialect: Dialect, command: &Command) -> String {
    match (dialect, command) {
        (_, Command::Unrecognized { raw }) => raw.clone(),

        (Dialect::Terse, Command::Write { key, value }) => format!("SET {} = {};", key, value),
        (Dialect::Terse, Command::ReadOne { key }) => format!("GET {};", key),
        (Dialect::Terse, Command::ReadAll) => "KEYS;".to_string(),

        (Dialect::Sql, Command::Write { key, value }) => format!(
            "INSERT INTO memtable (id, value) VALUES ('{}', '{}');",
            key, value
        ),
        (Dialect::Sql, Command::ReadOne { key }) => {
            format!("SELECT value FROM memtable WHERE id='{}';", key)
        }
        (Dialect::Sql, Command::ReadAll) => "SELECT * FROM memtable;".to_string(),
    }
}
