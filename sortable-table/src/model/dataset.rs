use std::sync::Arc;

use serde_json::{Map, Value};

/// One record: column id to value. Nested objects are reachable by dotted
/// column ids when sorting.
pub type Row = Map<String, Value>;

/// The current row snapshot.
///
/// Rows are never edited in place. Sorting builds a new vector and swaps it
/// in, so anyone holding an earlier [`snapshot`](Dataset::snapshot) keeps
/// seeing the order they were given.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Arc<Vec<Row>>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<Vec<Row>> {
        Arc::clone(&self.rows)
    }

    /// Swap in a new snapshot. The previous one is left as it was.
    pub fn replace_rows(&mut self, rows: Vec<Row>) {
        self.rows = Arc::new(rows);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}
