use std::collections::HashSet;

use super::ColumnSpec;
use crate::error::ConstructionError;

/// Validated, ordered column list. Immutable once built.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

impl Schema {
    /// Validates the columns: at least one, unique ids, and a sort type on
    /// every sortable column.
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self, ConstructionError> {
        if columns.is_empty() {
            return Err(ConstructionError::MissingColumns);
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(ConstructionError::duplicate_column(&column.id));
            }
            if column.sortable && column.sort_type.is_none() {
                return Err(ConstructionError::missing_sort_type(&column.id));
            }
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
