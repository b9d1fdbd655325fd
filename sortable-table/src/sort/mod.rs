//! Sort engine: resolves a column, builds a comparator for its sort type and
//! direction, and produces a newly ordered copy of the rows.

mod accessor;
mod collate;

use std::cmp::Ordering;

use serde_json::Value;

pub use accessor::Accessor;
pub use collate::{CollationKey, locale_compare};

use crate::error::SortConfigError;
use crate::model::{ColumnSpec, Direction, Row, SortType};

/// Comparison value extracted from one row.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(Option<f64>),
    Text(Option<CollationKey>),
}

impl SortKey {
    /// Extract the key for `sort_type` from a raw value. Values that cannot
    /// be read as the sort type are absent.
    pub fn extract(sort_type: SortType, value: Option<&Value>) -> Self {
        match sort_type {
            SortType::Number => Self::Number(value.and_then(numeric_value)),
            SortType::String => Self::Text(value.and_then(text_value).map(|s| CollationKey::new(&s))),
        }
    }
}

/// Natural (ascending) ordering of two keys. Absent values come first.
fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Number(a), SortKey::Number(b)) => match (a, b) {
            (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (a, b) => a.is_some().cmp(&b.is_some()),
        },
        (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
        // Keys of one pass always share a sort type
        _ => Ordering::Equal,
    }
}

/// Ordering function for one sort type and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparator {
    sort_type: SortType,
    direction: Direction,
}

impl Comparator {
    pub fn new(sort_type: SortType, direction: Direction) -> Self {
        Self {
            sort_type,
            direction,
        }
    }

    pub fn key(&self, value: Option<&Value>) -> SortKey {
        SortKey::extract(self.sort_type, value)
    }

    pub fn compare(&self, a: &SortKey, b: &SortKey) -> Ordering {
        let ordering = compare_keys(a, b);
        match self.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }

    /// Compare two raw values directly.
    pub fn compare_values(&self, a: Option<&Value>, b: Option<&Value>) -> Ordering {
        self.compare(&self.key(a), &self.key(b))
    }
}

/// Resolve `column_id` to a sortable column and its sort type.
pub fn resolve_column<'a>(
    columns: &'a [ColumnSpec],
    column_id: &str,
) -> Result<(&'a ColumnSpec, SortType), SortConfigError> {
    let column = columns
        .iter()
        .find(|c| c.id == column_id)
        .ok_or_else(|| SortConfigError::unknown_column(column_id))?;

    if !column.sortable {
        return Err(SortConfigError::not_sortable(column_id));
    }

    let sort_type = column
        .sort_type
        .ok_or_else(|| SortConfigError::MissingSortType {
            id: column_id.to_string(),
        })?;

    Ok((column, sort_type))
}

/// Return a copy of `rows` ordered by `column_id`.
///
/// The input slice is never modified. Rows with equal keys keep their
/// relative order.
pub fn sort_rows(
    columns: &[ColumnSpec],
    rows: &[Row],
    column_id: &str,
    direction: Direction,
) -> Result<Vec<Row>, SortConfigError> {
    let (column, sort_type) = resolve_column(columns, column_id)?;
    let accessor = Accessor::new(&column.id);
    let comparator = Comparator::new(sort_type, direction);

    let mut keyed: Vec<(SortKey, &Row)> = rows
        .iter()
        .map(|row| (comparator.key(accessor.get(row)), row))
        .collect();

    // Stable
    keyed.sort_by(|(a, _), (b, _)| comparator.compare(a, b));

    log::debug!(
        "[sort] {} rows by '{}' ({}, {})",
        rows.len(),
        column_id,
        sort_type,
        direction
    );

    Ok(keyed.into_iter().map(|(_, row)| row.clone()).collect())
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
