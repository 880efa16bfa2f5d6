//! Result Cursor Module
//!
//! Tabular results of read commands.
//!
//! A `ResultSet` is built once by the executor and turned into a single
//! forward-only `Rows` cursor. Reading the rows again means running the
//! query again.

use std::iter::FusedIterator;
use std::vec;

use crate::error::{Result, SqlKvError};

/// Column header plus materialized rows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultSet {
    /// Create an empty result set with the given header
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row
    ///
    /// Fails with `ColumnMismatch` unless the row is as wide as the header.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(SqlKvError::ColumnMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the result set into its cursor
    pub fn into_rows(self) -> Rows {
        Rows {
            columns: self.columns,
            rows: self.rows.into_iter(),
        }
    }
}

/// Forward-only cursor over a result set
///
/// Positioned before the first row. Once exhausted, every further advance
/// returns `None`.
#[derive(Debug)]
pub struct Rows {
    columns: Vec<String>,
    rows: vec::IntoIter<Vec<String>>,
}

impl Rows {
    /// A cursor with no columns and no rows (result of a write)
    pub fn empty() -> Self {
        ResultSet::default().into_rows()
    }

    /// Column names shared by every row
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Next row, or `None` once exhausted
    pub fn advance(&mut self) -> Option<Vec<String>> {
        self.rows.next()
    }

    /// Copy the next row into `dest`
    ///
    /// Returns `Ok(false)` once exhausted. `dest` must have one slot per
    /// column; the row is not consumed when it doesn't.
    pub fn read_into(&mut self, dest: &mut [String]) -> Result<bool> {
        if dest.len() != self.columns.len() {
            return Err(SqlKvError::ColumnMismatch {
                expected: self.columns.len(),
                actual: dest.len(),
            });
        }

        match self.rows.next() {
            Some(row) => {
                for (slot, cell) in dest.iter_mut().zip(row) {
                    *slot = cell;
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Rows not yet consumed
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }

    /// Drop any unread rows
    pub fn close(&mut self) {
        self.rows = Vec::new().into_iter();
    }
}

impl Iterator for Rows {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for Rows {}

impl FusedIterator for Rows {}
