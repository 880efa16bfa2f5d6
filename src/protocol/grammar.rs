//! Command grammars
//!
//! A grammar is an ordered table of rules. Each rule pairs a regular
//! expression with named capture groups and the `CommandKind` it builds.
//! Matching is first-match-wins; rule tables are written so that no input
//! matches more than one rule.

use regex::{Captures, Regex};

use crate::error::{Result, SqlKvError};
use super::{Command, CommandKind};

// =============================================================================
// Built-in Rule Tables
// =============================================================================

const TERSE_RULES: &[(&str, &str, CommandKind)] = &[
    ("keys", r"^\s*KEYS\s*;\s*$", CommandKind::ReadAll),
    ("get", r"^\s*GET\s+(?P<key>[^\s=;]+)\s*;\s*$", CommandKind::ReadOne),
    // Exactly one whitespace character after `=` is part of the separator.
    (
        "set",
        r"(?s)^\s*SET\s+(?P<key>[^\s=;]+)\s+=\s(?P<value>.*);\s*$",
        CommandKind::Write,
    ),
];

const SQL_RULES: &[(&str, &str, CommandKind)] = &[
    (
        "select_all",
        r"(?i)^\s*SELECT\s+\*\s+FROM\s+memtable\s*;\s*$",
        CommandKind::ReadAll,
    ),
    (
        "select_value",
        r"(?i)^\s*SELECT\s+value\s+FROM\s+memtable\s+WHERE\s+id\s*=\s*'(?P<key>[^']*)'\s*;\s*$",
        CommandKind::ReadOne,
    ),
    (
        "insert",
        r"(?is)^\s*INSERT\s+INTO\s+memtable\s*\(\s*id\s*,\s*value\s*\)\s*VALUES\s*\(\s*'(?P<key>[^']*)'\s*,\s*'(?P<value>.*)'\s*\)\s*;\s*$",
        CommandKind::Write,
    ),
];

// =============================================================================
// Dialect
// =============================================================================

/// Built-in command dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `SET k = v;`, `GET k;`, `KEYS;`
    Terse,

    /// `INSERT INTO memtable ...`, `SELECT ... FROM memtable ...`
    Sql,
}

impl Dialect {
    /// Dialect name
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Terse => "terse",
            Dialect::Sql => "sql",
        }
    }

    /// Compile the grammar for this dialect
    pub fn grammar(&self) -> Result<Grammar> {
        let (table, columns) = match self {
            Dialect::Terse => (TERSE_RULES, Columns::new(&["value"], &["key", "value"])),
            Dialect::Sql => (SQL_RULES, Columns::new(&["value"], &["id", "value"])),
        };

        table
            .iter()
            .try_fold(
                Grammar::new(self.name(), columns),
                |grammar, (id, pattern, kind)| -> Result<Grammar> {
                    Ok(grammar.rule(Rule::new(*id, pattern, *kind)?))
                },
            )
    }
}

// =============================================================================
// Columns
// =============================================================================

/// Column headers a grammar attaches to read results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    /// Header of a single-key read
    pub lookup: Vec<String>,

    /// Header of a full scan (key column, value column)
    pub scan: Vec<String>,
}

impl Columns {
    pub fn new(lookup: &[&str], scan: &[&str]) -> Self {
        Self {
            lookup: lookup.iter().map(|c| c.to_string()).collect(),
            scan: scan.iter().map(|c| c.to_string()).collect(),
        }
    }
}

// =============================================================================
// Rule
// =============================================================================

/// One entry of a grammar table
#[derive(Debug, Clone)]
pub struct Rule {
    id: String,
    pattern: Regex,
    kind: CommandKind,
}

impl Rule {
    /// Compile a rule
    ///
    /// The pattern should define a named group for every name in
    /// `kind.captures()`. A missing group is only detected when the rule
    /// matches, as `SqlKvError::MalformedMatch`.
    pub fn new(id: impl Into<String>, pattern: &str, kind: CommandKind) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            pattern: Regex::new(pattern)?,
            kind,
        })
    }

    /// Rule identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Kind of command the rule builds
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Check if the rule's pattern matches the query
    pub fn is_match(&self, query: &str) -> bool {
        self.pattern.is_match(query)
    }

    /// Try the rule against a query
    ///
    /// Returns:
    /// - `Ok(Some(command))`: matched and built
    /// - `Ok(None)`: pattern did not match
    /// - `Err(MalformedMatch)`: matched with an inconsistent capture set
    pub fn apply(&self, query: &str) -> Result<Option<Command>> {
        let Some(caps) = self.pattern.captures(query) else {
            return Ok(None);
        };

        let values: Option<Vec<String>> = self
            .kind
            .captures()
            .iter()
            .map(|name| caps.name(name).map(|m| m.as_str().to_string()))
            .collect();

        match values.and_then(|values| self.kind.build(values)) {
            Some(command) => Ok(Some(command)),
            None => Err(SqlKvError::MalformedMatch {
                rule: self.id.clone(),
                query: query.to_string(),
                captures: self.captured_groups(&caps),
            }),
        }
    }

    fn captured_groups(&self, caps: &Captures<'_>) -> Vec<(String, Option<String>)> {
        self.pattern
            .capture_names()
            .flatten()
            .map(|name| {
                let text = caps.name(name).map(|m| m.as_str().to_string());
                (name.to_string(), text)
            })
            .collect()
    }
}

// =============================================================================
// Grammar
// =============================================================================

/// An ordered rule table with its result headers
#[derive(Debug, Clone)]
pub struct Grammar {
    name: String,
    rules: Vec<Rule>,
    columns: Columns,
}

impl Grammar {
    /// Create an empty grammar
    pub fn new(name: impl Into<String>, columns: Columns) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            columns,
        }
    }

    /// Append a rule (lowest priority so far)
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Grammar for the terse dialect
    pub fn terse() -> Result<Self> {
        Dialect::Terse.grammar()
    }

    /// Grammar for the SQL-shaped dialect
    pub fn sql() -> Result<Self> {
        Dialect::Sql.grammar()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Classify a query
    ///
    /// Returns `Command::Unrecognized` when no rule matches.
    pub fn match_command(&self, query: &str) -> Result<Command> {
        for rule in &self.rules {
            if let Some(command) = rule.apply(query)? {
                tracing::trace!(grammar = %self.name, rule = %rule.id, "Matched rule");
                return Ok(command);
            }
        }

        Ok(Command::Unrecognized {
            raw: query.to_string(),
        })
    }

    /// Ids of every rule whose pattern matches the query
    ///
    /// A well-formed grammar returns at most one id for any input.
    pub fn matching_rules(&self, query: &str) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|rule| rule.is_match(query))
            .map(|rule| rule.id())
            .collect()
    }
}
