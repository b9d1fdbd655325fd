//! Table configuration and file-driven table specs.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::ConstructionError;
use crate::model::{ColumnSpec, Row};
use crate::render::cell_text;
use crate::sort::Accessor;
use crate::table::Table;

/// Resolves the navigation target for a body row. `None` renders the row
/// without a link.
pub type RowLink = Arc<dyn Fn(&Row) -> Option<String> + Send + Sync>;

/// Column id that carries the indicator before any click, unless configured
/// otherwise.
pub const DEFAULT_INITIAL_SORT_COLUMN: &str = "title";

const DEFAULT_EMPTY_MESSAGE: &str = "No products satisfies your filter criteria";
const DEFAULT_RESET_LABEL: &str = "Reset all filters";

/// Per-table configuration.
#[derive(Clone)]
pub struct TableConfig {
    /// Column pre-marked with the sort indicator at first render.
    pub initial_sort_column: Option<String>,

    /// Row link hook.
    pub row_link: Option<RowLink>,

    /// Text of the empty-state placeholder.
    pub empty_message: String,

    /// Label of the placeholder's reset button.
    pub reset_label: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_sort_column: Some(DEFAULT_INITIAL_SORT_COLUMN.to_string()),
            row_link: None,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            reset_label: DEFAULT_RESET_LABEL.to_string(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-mark `column_id` with the sort indicator.
    pub fn initial_sort_column(mut self, column_id: impl Into<String>) -> Self {
        self.initial_sort_column = Some(column_id.into());
        self
    }

    /// Render no indicator until the first header click.
    pub fn without_initial_sort(mut self) -> Self {
        self.initial_sort_column = None;
        self
    }

    /// Link each row to the URL returned by `link`.
    pub fn row_link(mut self, link: impl Fn(&Row) -> Option<String> + Send + Sync + 'static) -> Self {
        self.row_link = Some(Arc::new(link));
        self
    }

    /// Link rows through a URL pattern such as `/products/{id}`.
    ///
    /// Placeholders name row fields (dotted paths allowed). A row missing
    /// any placeholder field gets no link.
    pub fn link_pattern(self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        self.row_link(move |row| expand_link_pattern(&pattern, row))
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn reset_label(mut self, label: impl Into<String>) -> Self {
        self.reset_label = label.into();
        self
    }

    pub(crate) fn resolve_link(&self, row: &Row) -> Option<String> {
        self.row_link.as_ref().and_then(|link| link(row))
    }
}

impl fmt::Debug for TableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableConfig")
            .field("initial_sort_column", &self.initial_sort_column)
            .field("row_link", &self.row_link.as_ref().map(|_| "..."))
            .field("empty_message", &self.empty_message)
            .field("reset_label", &self.reset_label)
            .finish()
    }
}

/// Substitute `{field}` placeholders with row values.
pub fn expand_link_pattern(pattern: &str, row: &Row) -> Option<String> {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}')?;
        let value = Accessor::new(&after[..end]).get(row)?;
        out.push_str(&cell_text(Some(value)));
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    Some(out)
}

fn default_initial_sort_column() -> Option<String> {
    Some(DEFAULT_INITIAL_SORT_COLUMN.to_string())
}

/// Table description loaded from JSON.
///
/// ```json
/// {
///   "columns": [{"id": "title", "title": "Name", "sortable": true, "sortType": "string"}],
///   "data": [{"title": "Epson 3D glasses"}],
///   "rowLink": "/products/{id}"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSpec {
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub data: Vec<Row>,
    #[serde(default = "default_initial_sort_column")]
    pub initial_sort_column: Option<String>,
    #[serde(default)]
    pub row_link: Option<String>,
    #[serde(default)]
    pub empty_message: Option<String>,
    #[serde(default)]
    pub reset_label: Option<String>,
}

impl TableSpec {
    pub fn from_json(json: &str) -> Result<Self, ConstructionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configuration this spec describes.
    pub fn config(&self) -> TableConfig {
        let mut config = TableConfig {
            initial_sort_column: self.initial_sort_column.clone(),
            ..Default::default()
        };
        if let Some(pattern) = &self.row_link {
            config = config.link_pattern(pattern.clone());
        }
        if let Some(message) = &self.empty_message {
            config = config.empty_message(message.clone());
        }
        if let Some(label) = &self.reset_label {
            config = config.reset_label(label.clone());
        }
        config
    }

    /// Build the table.
    pub fn into_table(self) -> Result<Table, ConstructionError> {
        let config = self.config();
        Table::with_config(self.columns, self.data, config)
    }
}
