//! Column definitions.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SortConfigError;

/// Custom cell renderer: raw cell value (None when the row lacks the key) to
/// markup. The returned markup replaces the whole default cell.
pub type CellTemplate = Arc<dyn Fn(Option<&Value>) -> String + Send + Sync>;

/// How values of a sortable column are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// Numeric ordering.
    Number,
    /// Locale-aware text collation.
    String,
}

impl SortType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortType {
    type Err = SortConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            other => Err(SortConfigError::UnsupportedSortType {
                value: other.to_string(),
            }),
        }
    }
}

/// Column configuration.
///
/// # Examples
///
/// ```
/// use sortable_table::{ColumnSpec, SortType};
///
/// let columns = vec![
///     ColumnSpec::new("images", "Image")
///         .template(|_| r#"<div class="sortable-table__cell"><img alt=""></div>"#.into()),
///     ColumnSpec::new("title", "Name").sortable(SortType::String),
///     ColumnSpec::new("quantity", "Quantity").sortable(SortType::Number),
/// ];
/// assert!(columns[1].sortable);
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Key into row records; dotted paths reach nested values when sorting.
    pub id: String,
    /// Header text
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_type: Option<SortType>,
    #[serde(skip)]
    pub template: Option<CellTemplate>,
}

impl ColumnSpec {
    /// Create a non-sortable column.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sortable: false,
            sort_type: None,
            template: None,
        }
    }

    /// Make the column sortable with the given comparison type.
    pub fn sortable(mut self, sort_type: SortType) -> Self {
        self.sortable = true;
        self.sort_type = Some(sort_type);
        self
    }

    /// Render cells of this column with a custom template.
    pub fn template(mut self, template: impl Fn(Option<&Value>) -> String + Send + Sync + 'static) -> Self {
        self.template = Some(Arc::new(template));
        self
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("sort_type", &self.sort_type)
            .field("template", &self.template.as_ref().map(|_| "..."))
            .finish()
    }
}
