//! Rows Tests
//!
//! Tests for result set construction and forward-only cursors.

use sqlkv::{ResultSet, Rows, SqlKvError};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn two_row_set() -> ResultSet {
    let mut result = ResultSet::new(row(&["key", "value"]));
    result.push_row(row(&["a", "1"])).unwrap();
    result.push_row(row(&["b", "2"])).unwrap();
    result
}

// =============================================================================
// ResultSet Tests
// =============================================================================

#[test]
fn test_push_row_enforces_width() {
    let mut result = ResultSet::new(row(&["value"]));

    let err = result.push_row(row(&["a", "b"])).unwrap_err();
    match err {
        SqlKvError::ColumnMismatch { expected, actual } => {
            assert_eq!(expected, 1);
            assert_eq!(actual, 2);
        }
        other => panic!("Expected ColumnMismatch, got {:?}", other),
    }
    assert!(result.is_empty());
}

#[test]
fn test_result_set_preserves_row_order() {
    let result = two_row_set();
    assert_eq!(result.len(), 2);

    let rows: Vec<Vec<String>> = result.into_rows().collect();
    assert_eq!(rows, vec![row(&["a", "1"]), row(&["b", "2"])]);
}

// =============================================================================
// Cursor Tests
// =============================================================================

#[test]
fn test_advance_until_exhausted() {
    let mut rows = two_row_set().into_rows();

    assert_eq!(rows.columns(), ["key", "value"]);
    assert_eq!(rows.remaining(), 2);
    assert_eq!(rows.advance(), Some(row(&["a", "1"])));
    assert_eq!(rows.advance(), Some(row(&["b", "2"])));
    assert_eq!(rows.advance(), None);
    assert_eq!(rows.remaining(), 0);
}

#[test]
fn test_exhaustion_is_idempotent() {
    let mut rows = two_row_set().into_rows();
    while rows.advance().is_some() {}

    for _ in 0..5 {
        assert_eq!(rows.advance(), None);
    }
    assert_eq!(rows.next(), None);
}

#[test]
fn test_read_into_copies_cells() {
    let mut rows = two_row_set().into_rows();
    let mut dest = vec![String::new(), String::new()];

    assert!(rows.read_into(&mut dest).unwrap());
    assert_eq!(dest, row(&["a", "1"]));
    assert!(rows.read_into(&mut dest).unwrap());
    assert_eq!(dest, row(&["b", "2"]));
    assert!(!rows.read_into(&mut dest).unwrap());
    assert!(!rows.read_into(&mut dest).unwrap());
}

#[test]
fn test_read_into_wrong_width_keeps_row() {
    let mut rows = two_row_set().into_rows();
    let mut narrow = vec![String::new()];

    assert!(matches!(
        rows.read_into(&mut narrow),
        Err(SqlKvError::ColumnMismatch { expected: 2, actual: 1 })
    ));
    assert_eq!(rows.advance(), Some(row(&["a", "1"])));
}

#[test]
fn test_close_drops_unread_rows() {
    let mut rows = two_row_set().into_rows();
    rows.advance();

    rows.close();

    assert_eq!(rows.advance(), None);
    assert_eq!(rows.columns(), ["key", "value"]);
}

#[test]
fn test_empty_cursor() {
    let mut rows = Rows::empty();
    assert!(rows.columns().is_empty());
    assert_eq!(rows.len(), 0);
    assert_eq!(rows.advance(), None);
}
