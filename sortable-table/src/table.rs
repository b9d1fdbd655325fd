//! The table component.

use std::collections::HashMap;
use std::sync::Arc;

use tabledom::{Element, HtmlWriter, find_by_data, find_element, find_element_mut, sub_elements};

use crate::config::TableConfig;
use crate::error::{ConstructionError, SortConfigError};
use crate::model::{ColumnSpec, Dataset, Direction, Row, Schema, SortState};
use crate::render::{self, data, markers};
use crate::sort::sort_rows;

/// A sortable table.
///
/// Owns its schema, the current row snapshot, the sort state and the
/// rendered element tree. The tree is built once by [`Table::new`]; sorting
/// afterwards only swaps the body rows (and, for header clicks, the header
/// cells that carry the indicator).
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use sortable_table::{ColumnSpec, Direction, SortType, Table};
///
/// let columns = vec![
///     ColumnSpec::new("name", "Name").sortable(SortType::String),
///     ColumnSpec::new("age", "Age").sortable(SortType::Number),
/// ];
/// let rows = vec![
///     json!({"name": "Bob", "age": 30}).as_object().unwrap().clone(),
///     json!({"name": "Ann", "age": 25}).as_object().unwrap().clone(),
/// ];
///
/// let mut table = Table::new(columns, rows).unwrap();
/// table.sort("age", Direction::Asc).unwrap();
/// assert_eq!(table.rows()[0]["name"], "Ann");
/// ```
pub struct Table {
    schema: Schema,
    dataset: Dataset,
    state: SortState,
    config: TableConfig,
    element: Option<Element>,
    sub_elements: HashMap<String, String>,
}

impl Table {
    /// Build and render a table with the default configuration.
    pub fn new(columns: Vec<ColumnSpec>, data: Vec<Row>) -> Result<Self, ConstructionError> {
        Self::with_config(columns, data, TableConfig::default())
    }

    /// Build and render a table.
    pub fn with_config(
        columns: Vec<ColumnSpec>,
        data: Vec<Row>,
        config: TableConfig,
    ) -> Result<Self, ConstructionError> {
        let schema = Schema::new(columns)?;
        let state = SortState::with_initial(config.initial_sort_column.clone());

        let mut table = Self {
            schema,
            dataset: Dataset::new(data),
            state,
            config,
            element: None,
            sub_elements: HashMap::new(),
        };
        table.render();

        log::debug!(
            "[table] created with {} columns, {} rows",
            table.schema.len(),
            table.dataset.len()
        );
        Ok(table)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Build the full element tree from the current state, replacing any
    /// existing tree, and refresh the sub-element lookup.
    pub fn render(&mut self) {
        let root = render::render_shell(
            self.schema.columns(),
            self.dataset.rows(),
            &self.state,
            &self.config,
        );
        self.sub_elements = sub_elements(&root);
        self.element = Some(root);
    }

    /// Detach the element tree. The table keeps its rows and sort state and
    /// can be rendered again.
    pub fn remove(&mut self) {
        if self.element.take().is_some() {
            log::trace!("[table] removed");
        }
        self.sub_elements.clear();
    }

    /// Detach the tree and release the table.
    pub fn destroy(mut self) {
        self.remove();
        log::trace!("[table] destroyed");
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Sort the rows by `column_id` and re-render the body.
    ///
    /// Sorting a column the schema marks as not sortable does nothing. An
    /// unknown column is an error, and on any error the rows and the tree
    /// are left as they were. Header indicators are not touched.
    pub fn sort(&mut self, column_id: &str, direction: Direction) -> Result<(), SortConfigError> {
        let column = self
            .schema
            .column(column_id)
            .ok_or_else(|| SortConfigError::unknown_column(column_id))?;

        if !column.sortable {
            log::debug!("[table] ignoring sort on unsortable column '{}'", column_id);
            return Ok(());
        }

        let sorted = sort_rows(self.schema.columns(), self.dataset.rows(), column_id, direction)?;
        self.dataset.replace_rows(sorted);
        self.update_body();
        Ok(())
    }

    fn update_body(&mut self) {
        let (Some(root), Some(body_id)) = (self.element.as_mut(), self.sub_elements.get(markers::BODY))
        else {
            return;
        };
        render::update_body(
            root,
            body_id,
            self.dataset.rows(),
            self.schema.columns(),
            &self.config,
        );
    }

    pub(crate) fn update_header(&mut self) {
        let (Some(root), Some(header_id)) =
            (self.element.as_mut(), self.sub_elements.get(markers::HEADER))
        else {
            return;
        };
        if render::update_header(root, header_id, self.schema.columns(), &self.state) {
            // Header cells were rebuilt with fresh ids
            self.sub_elements = sub_elements(root);
        }
    }

    pub(crate) fn state_mut(&mut self) -> &mut SortState {
        &mut self.state
    }

    pub(crate) fn schema(&self) -> &Schema {
        &self.schema
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn columns(&self) -> &[ColumnSpec] {
        self.schema.columns()
    }

    pub fn rows(&self) -> &[Row] {
        self.dataset.rows()
    }

    /// Shared handle to the current row snapshot.
    pub fn snapshot(&self) -> Arc<Vec<Row>> {
        self.dataset.snapshot()
    }

    pub fn sort_state(&self) -> &SortState {
        &self.state
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The rendered tree, or None after [`remove`](Table::remove).
    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    /// Element registered under a `data-element` name.
    pub fn sub_element(&self, name: &str) -> Option<&Element> {
        let id = self.sub_elements.get(name)?;
        find_element(self.element.as_ref()?, id)
    }

    /// Mutable access to a named region, e.g. to toggle classes on the
    /// loading line or the empty placeholder.
    pub fn sub_element_mut(&mut self, name: &str) -> Option<&mut Element> {
        let id = self.sub_elements.get(name)?;
        find_element_mut(self.element.as_mut()?, id)
    }

    /// Names of every registered sub-element.
    pub fn sub_element_names(&self) -> impl Iterator<Item = &str> {
        self.sub_elements.keys().map(String::as_str)
    }

    /// Header cell for a column.
    pub fn header_cell(&self, column_id: &str) -> Option<&Element> {
        find_by_data(self.sub_element(markers::HEADER)?, data::ID, column_id)
    }

    /// Serialized markup, or None after [`remove`](Table::remove).
    pub fn to_html(&self) -> Option<String> {
        self.element.as_ref().map(tabledom::to_html)
    }

    /// Serialized markup including element ids, for hosts that route DOM
    /// events back through [`handle_event`](Table::handle_event).
    pub fn to_html_with_ids(&self) -> Option<String> {
        let writer = HtmlWriter::new().with_ids(true);
        self.element.as_ref().map(|root| writer.write(root))
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.schema.len())
            .field("rows", &self.dataset.len())
            .field("state", &self.state)
            .field("rendered", &self.element.is_some())
            .finish()
    }
}
