//! Builds the table's element tree.
//!
//! Everything here is a pure function of columns, rows, sort state and
//! config, except [`update_body`] and [`update_header`], which swap the
//! children of an existing region in place.

use serde_json::Value;
use tabledom::{Element, find_element_mut};

use crate::config::TableConfig;
use crate::model::{ColumnSpec, Row, SortState};

/// `data-element` names of the table's regions.
pub mod markers {
    pub const CONTAINER: &str = "productsContainer";
    pub const HEADER: &str = "header";
    pub const BODY: &str = "body";
    pub const LOADING: &str = "loading";
    pub const EMPTY_PLACEHOLDER: &str = "emptyPlaceholder";
    pub const ARROW: &str = "arrow";
}

/// Class names used in the markup.
pub mod classes {
    pub const CONTAINER: &str = "products-list__container";
    pub const TABLE: &str = "sortable-table";
    pub const HEADER: &str = "sortable-table__header";
    pub const ROW: &str = "sortable-table__row";
    pub const BODY: &str = "sortable-table__body";
    pub const CELL: &str = "sortable-table__cell";
    pub const LOADING_LINE: &str = "loading-line";
    pub const LOADING: &str = "sortable-table__loading-line";
    pub const EMPTY_PLACEHOLDER: &str = "sortable-table__empty-placeholder";
    pub const SORT_ARROW: &str = "sortable-table__sort-arrow";
    pub const ARROW: &str = "sort-arrow";
    pub const RESET_BUTTON: &str = "button-primary-outline";
}

/// Header cell data keys.
pub mod data {
    pub const ID: &str = "id";
    pub const SORTABLE: &str = "sortable";
    pub const ORDER: &str = "order";
}

/// Build the whole table: container, header, body, loading line and empty
/// placeholder.
pub fn render_shell(
    columns: &[ColumnSpec],
    rows: &[Row],
    state: &SortState,
    config: &TableConfig,
) -> Element {
    let header = Element::div()
        .marker(markers::HEADER)
        .class(classes::HEADER)
        .class(classes::ROW)
        .children(render_header_cells(columns, state));

    let body = Element::div()
        .marker(markers::BODY)
        .class(classes::BODY)
        .children(render_body_rows(rows, columns, config));

    let loading = Element::div()
        .marker(markers::LOADING)
        .class(classes::LOADING_LINE)
        .class(classes::LOADING);

    let empty = Element::div()
        .marker(markers::EMPTY_PLACEHOLDER)
        .class(classes::EMPTY_PLACEHOLDER)
        .child(
            Element::div()
                .child(Element::paragraph(&config.empty_message))
                .child(Element::button(&config.reset_label).class(classes::RESET_BUTTON)),
        );

    Element::div()
        .marker(markers::CONTAINER)
        .class(classes::CONTAINER)
        .child(
            Element::div()
                .class(classes::TABLE)
                .child(header)
                .child(body)
                .child(loading)
                .child(empty),
        )
}

/// One header cell per column, in column order.
pub fn render_header_cells(columns: &[ColumnSpec], state: &SortState) -> Vec<Element> {
    let indicator = state.indicator_column();
    columns
        .iter()
        .map(|column| render_header_cell(column, state, indicator == Some(column.id.as_str())))
        .collect()
}

fn render_header_cell(column: &ColumnSpec, state: &SortState, with_arrow: bool) -> Element {
    let mut cell = Element::div()
        .class(classes::CELL)
        .data(data::ID, &column.id)
        .data(data::SORTABLE, column.sortable.to_string());

    if column.sortable {
        cell.set_data(data::ORDER, state.direction(&column.id).as_str());
    }

    let cell = cell.child(Element::span().text(&column.title));
    if with_arrow {
        cell.child(render_sort_arrow())
    } else {
        cell
    }
}

/// The sort indicator.
pub fn render_sort_arrow() -> Element {
    Element::span()
        .marker(markers::ARROW)
        .class(classes::SORT_ARROW)
        .child(Element::span().class(classes::ARROW))
}

/// One row container per row.
pub fn render_body_rows(rows: &[Row], columns: &[ColumnSpec], config: &TableConfig) -> Vec<Element> {
    rows.iter()
        .map(|row| render_row(row, columns, config))
        .collect()
}

fn render_row(row: &Row, columns: &[ColumnSpec], config: &TableConfig) -> Element {
    let container = match config.resolve_link(row) {
        Some(href) => Element::anchor(href),
        None => Element::div(),
    };

    container
        .class(classes::ROW)
        .children(columns.iter().map(|column| render_cell(row, column)))
}

/// A body cell. Looks the value up by the plain column id; dotted paths are
/// only resolved when sorting, so nested columns need a template.
pub fn render_cell(row: &Row, column: &ColumnSpec) -> Element {
    let value = row.get(&column.id);
    match &column.template {
        Some(template) => Element::fragment(template(value)),
        None => Element::div().class(classes::CELL).text(cell_text(value)),
    }
}

/// Display text of a raw cell value. Missing and null values render empty.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Replace the body region's rows. Returns false when `body_id` is not in
/// the tree.
pub fn update_body(
    root: &mut Element,
    body_id: &str,
    rows: &[Row],
    columns: &[ColumnSpec],
    config: &TableConfig,
) -> bool {
    let Some(body) = find_element_mut(root, body_id) else {
        return false;
    };
    body.set_children(render_body_rows(rows, columns, config));
    true
}

/// Re-render the header cells from `state`, which leaves exactly one
/// indicator (or none). Returns false when `header_id` is not in the tree.
pub fn update_header(
    root: &mut Element,
    header_id: &str,
    columns: &[ColumnSpec],
    state: &SortState,
) -> bool {
    let Some(header) = find_element_mut(root, header_id) else {
        return false;
    };
    header.set_children(render_header_cells(columns, state));
    true
}
