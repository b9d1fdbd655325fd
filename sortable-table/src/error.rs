//! Error types

/// Errors raised while building a table. No table exists afterwards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// The column list was empty.
    #[error("Error creating SortableTable. Header is not set")]
    MissingColumns,

    /// Two columns share an id.
    #[error("Duplicate column id '{id}'")]
    DuplicateColumn { id: String },

    /// A sortable column has no sort type.
    #[error("Column '{id}' is sortable but has no sort type")]
    MissingSortType { id: String },

    /// A table spec document could not be parsed.
    #[error("Invalid table spec: {message}")]
    InvalidSpec { message: String },
}

impl ConstructionError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(id: impl Into<String>) -> Self {
        Self::DuplicateColumn { id: id.into() }
    }

    /// Creates a new missing sort type error.
    pub fn missing_sort_type(id: impl Into<String>) -> Self {
        Self::MissingSortType { id: id.into() }
    }
}

impl From<serde_json::Error> for ConstructionError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidSpec {
            message: err.to_string(),
        }
    }
}

/// Errors raised by a single sort request. The table is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortConfigError {
    /// No column has the requested id.
    #[error("Unknown column '{id}'")]
    UnknownColumn { id: String },

    /// The column exists but is not sortable.
    #[error("Column '{id}' is not sortable")]
    NotSortable { id: String },

    /// The column is sortable but declares no sort type.
    #[error("Column '{id}' has no sort type")]
    MissingSortType { id: String },

    /// The sort type is not one of `number` or `string`.
    #[error("Unsupported sort type '{value}'")]
    UnsupportedSortType { value: String },

    /// The direction is not one of `asc` or `desc`.
    #[error("Unsupported order '{value}'")]
    UnsupportedOrder { value: String },
}

impl SortConfigError {
    /// Creates a new unknown column error.
    pub fn unknown_column(id: impl Into<String>) -> Self {
        Self::UnknownColumn { id: id.into() }
    }

    /// Creates a new not sortable error.
    pub fn not_sortable(id: impl Into<String>) -> Self {
        Self::NotSortable { id: id.into() }
    }
}
