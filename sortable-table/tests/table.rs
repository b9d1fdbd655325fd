use std::sync::Arc;

use serde_json::{Value, json};
use sortable_table::render::markers;
use sortable_table::{
    ColumnSpec, ConstructionError, Direction, Row, SortConfigError, SortType, Table, TableConfig,
};
use tabledom::{Element, Event, EventResult, MouseButton, find_all_by_data};

fn row(value: Value) -> Row {
    value.as_object().cloned().expect("row must be an object")
}

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", "Name").sortable(SortType::String),
        ColumnSpec::new("age", "Age").sortable(SortType::Number),
        ColumnSpec::new("city", "City"),
    ]
}

fn rows() -> Vec<Row> {
    vec![
        row(json!({"name": "Bob", "age": 30, "city": "Oslo"})),
        row(json!({"name": "Ann", "age": 25, "city": "Riga"})),
        row(json!({"name": "Cid", "age": 41, "city": "Kyiv"})),
    ]
}

fn table() -> Table {
    Table::new(columns(), rows()).unwrap()
}

fn names(table: &Table) -> Vec<String> {
    table
        .rows()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect()
}

fn body_html(table: &Table) -> String {
    tabledom::to_html(table.sub_element(markers::BODY).unwrap())
}

fn header_id(table: &Table, column_id: &str) -> String {
    table.header_cell(column_id).unwrap().id.clone()
}

/// Id of the title span inside a header cell.
fn title_span_id(table: &Table, column_id: &str) -> String {
    table.header_cell(column_id).unwrap().child_elements()[0].id.clone()
}

fn arrows(table: &Table) -> Vec<&Element> {
    find_all_by_data(table.sub_element(markers::HEADER).unwrap(), "element")
        .into_iter()
        .filter(|el| el.marker_name() == Some(markers::ARROW))
        .collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_empty_columns_fail() {
    let err = Table::new(Vec::new(), rows()).unwrap_err();
    assert_eq!(err, ConstructionError::MissingColumns);
    assert_eq!(err.to_string(), "Error creating SortableTable. Header is not set");
}

#[test]
fn test_duplicate_column_fails() {
    let cols = vec![ColumnSpec::new("a", "A"), ColumnSpec::new("a", "Again")];
    assert_eq!(
        Table::new(cols, Vec::new()).unwrap_err(),
        ConstructionError::duplicate_column("a")
    );
}

#[test]
fn test_sortable_without_type_fails() {
    let mut column = ColumnSpec::new("a", "A");
    column.sortable = true;
    assert_eq!(
        Table::new(vec![column], Vec::new()).unwrap_err(),
        ConstructionError::missing_sort_type("a")
    );
}

#[test]
fn test_construction_renders_all_regions() {
    let table = table();
    for name in [
        markers::CONTAINER,
        markers::HEADER,
        markers::BODY,
        markers::LOADING,
        markers::EMPTY_PLACEHOLDER,
    ] {
        assert!(table.sub_element(name).is_some(), "missing region {name}");
    }
    assert_eq!(table.sub_element(markers::BODY).unwrap().child_elements().len(), 3);
}

#[test]
fn test_empty_data_still_renders_placeholder() {
    let table = Table::new(columns(), Vec::new()).unwrap();
    assert!(table.sub_element(markers::BODY).unwrap().child_elements().is_empty());
    let html = tabledom::to_html(table.sub_element(markers::EMPTY_PLACEHOLDER).unwrap());
    assert!(html.contains("No products satisfies your filter criteria"));
    assert!(html.contains("Reset all filters"));
}

// ============================================================================
// Programmatic sort
// ============================================================================

#[test]
fn test_sort_updates_rows_and_body() {
    let mut table = table();
    table.sort("age", Direction::Asc).unwrap();
    assert_eq!(names(&table), vec!["Ann", "Bob", "Cid"]);
    assert!(body_html(&table).find("Ann").unwrap() < body_html(&table).find("Bob").unwrap());

    table.sort("age", Direction::Desc).unwrap();
    assert_eq!(names(&table), vec!["Cid", "Bob", "Ann"]);

    table.sort("name", Direction::default()).unwrap();
    assert_eq!(names(&table), vec!["Ann", "Bob", "Cid"]);
}

#[test]
fn test_sort_swaps_snapshot() {
    let mut table = table();
    let before = table.snapshot();
    let retained: Vec<Row> = before.as_ref().clone();

    table.sort("age", Direction::Asc).unwrap();

    assert!(!Arc::ptr_eq(&before, &table.snapshot()));
    assert_eq!(*before, retained);
    assert_eq!(before[0]["name"], "Bob");
}

#[test]
fn test_unknown_column_leaves_table_untouched() {
    let mut table = table();
    let body = body_html(&table);

    let err = table.sort("missingColumn", Direction::Asc).unwrap_err();
    assert_eq!(err, SortConfigError::unknown_column("missingColumn"));
    assert_eq!(names(&table), vec!["Bob", "Ann", "Cid"]);
    assert_eq!(body_html(&table), body);
}

#[test]
fn test_sort_on_unsortable_column_is_noop() {
    let mut table = table();
    let before = table.snapshot();
    table.sort("city", Direction::Asc).unwrap();
    assert!(Arc::ptr_eq(&before, &table.snapshot()));
}

#[test]
fn test_programmatic_sort_leaves_header_alone() {
    let mut table = Table::with_config(columns(), rows(), TableConfig::new().initial_sort_column("name")).unwrap();
    let header = tabledom::to_html(table.sub_element(markers::HEADER).unwrap());
    table.sort("age", Direction::Desc).unwrap();
    assert_eq!(tabledom::to_html(table.sub_element(markers::HEADER).unwrap()), header);
    assert_eq!(table.sort_state().active_column(), None);
}

// ============================================================================
// Header clicks
// ============================================================================

#[test]
fn test_click_toggles_per_column_direction() {
    let mut table = table();
    let age = header_id(&table, "age");

    // Remembered direction starts at asc, so the first click sorts desc
    assert_eq!(table.handle_event(&Event::pointer_down(&age)), EventResult::Consumed);
    assert_eq!(names(&table), vec!["Cid", "Bob", "Ann"]);
    assert_eq!(table.header_cell("age").unwrap().get_data("order"), Some("desc"));

    let age = header_id(&table, "age");
    table.handle_event(&Event::pointer_down(&age));
    assert_eq!(names(&table), vec!["Ann", "Bob", "Cid"]);
    assert_eq!(table.sort_state().direction("age"), Direction::Asc);
}

#[test]
fn test_direction_memory_survives_other_columns() {
    let mut table = table();

    let age = header_id(&table, "age");
    table.handle_event(&Event::pointer_down(&age));
    assert_eq!(table.sort_state().direction("age"), Direction::Desc);

    let name = header_id(&table, "name");
    table.handle_event(&Event::pointer_down(&name));
    assert_eq!(table.sort_state().direction("name"), Direction::Desc);
    assert_eq!(names(&table), vec!["Cid", "Bob", "Ann"]);

    // Back to age: resumes from desc and flips to asc
    let age = header_id(&table, "age");
    table.handle_event(&Event::pointer_down(&age));
    assert_eq!(table.sort_state().direction("age"), Direction::Asc);
    assert_eq!(names(&table), vec!["Ann", "Bob", "Cid"]);
}

#[test]
fn test_click_on_nested_title_resolves_cell() {
    let mut table = table();
    let span = title_span_id(&table, "name");
    assert_eq!(table.handle_event(&Event::pointer_down(&span)), EventResult::Consumed);
    assert_eq!(table.sort_state().active_column(), Some("name"));
}

#[test]
fn test_exactly_one_indicator_after_clicks() {
    let mut table = table();

    for column in ["age", "name", "age", "age", "name"] {
        let id = header_id(&table, column);
        table.handle_event(&Event::pointer_down(&id));

        let arrows = arrows(&table);
        assert_eq!(arrows.len(), 1);
        let cell = table.header_cell(column).unwrap();
        assert!(tabledom::contains(cell, &arrows[0].id), "arrow not in {column}");
    }
}

#[test]
fn test_click_on_unsortable_cell_is_noop() {
    let mut table = table();
    let body = body_html(&table);
    let header = tabledom::to_html(table.sub_element(markers::HEADER).unwrap());

    let city = header_id(&table, "city");
    assert_eq!(table.handle_event(&Event::pointer_down(&city)), EventResult::Ignored);

    assert_eq!(body_html(&table), body);
    assert_eq!(tabledom::to_html(table.sub_element(markers::HEADER).unwrap()), header);
    assert_eq!(names(&table), vec!["Bob", "Ann", "Cid"]);
}

#[test]
fn test_clicks_outside_header_are_ignored() {
    let mut table = table();
    let body = body_html(&table);

    let first_row = table.sub_element(markers::BODY).unwrap().child_elements()[0].id.clone();
    assert_eq!(table.handle_event(&Event::pointer_down(&first_row)), EventResult::Ignored);

    let header = table.sub_element(markers::HEADER).unwrap().id.clone();
    assert_eq!(table.handle_event(&Event::pointer_down(&header)), EventResult::Ignored);

    assert_eq!(table.handle_event(&Event::pointer_down("unknown")), EventResult::Ignored);
    assert_eq!(
        table.handle_event(&Event::PointerDown {
            target: None,
            button: MouseButton::Left
        }),
        EventResult::Ignored
    );
    assert_eq!(body_html(&table), body);
}

#[test]
fn test_click_events_sort_like_pointer_down() {
    let mut table = table();
    let age = header_id(&table, "age");
    assert_eq!(table.handle_event(&Event::click(&age)), EventResult::Consumed);
    assert_eq!(table.sort_state().active_column(), Some("age"));
    assert_eq!(names(&table), vec!["Cid", "Bob", "Ann"]);

    let city = header_id(&table, "city");
    assert_eq!(table.handle_event(&Event::click(&city)), EventResult::Ignored);
}

#[test]
fn test_arrow_lookup_follows_clicked_cell() {
    let mut table = Table::with_config(columns(), rows(), TableConfig::new().initial_sort_column("name")).unwrap();
    assert!(table.sub_element_names().any(|name| name == markers::ARROW));
    assert!(table.sub_element(markers::ARROW).is_some());

    for column in ["age", "name"] {
        let id = header_id(&table, column);
        table.handle_event(&Event::pointer_down(&id));

        let arrow = table.sub_element(markers::ARROW).unwrap();
        let cell = table.header_cell(column).unwrap();
        assert!(tabledom::contains(cell, &arrow.id), "arrow lookup not in {column}");
    }
}

#[test]
fn test_markup_claiming_sortable_is_checked_against_schema() {
    let mut table = table();
    let cell_id = header_id(&table, "city");
    table
        .sub_element_mut(markers::HEADER)
        .and_then(|header| tabledom::find_element_mut(header, &cell_id))
        .unwrap()
        .set_data("sortable", "true");

    assert_eq!(table.handle_event(&Event::pointer_down(&cell_id)), EventResult::Ignored);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_remove_and_render_again() {
    let mut table = table();
    let age = header_id(&table, "age");
    table.handle_event(&Event::pointer_down(&age));

    table.remove();
    assert!(table.element().is_none());
    assert!(table.to_html().is_none());
    assert!(table.sub_element(markers::BODY).is_none());
    assert_eq!(table.handle_event(&Event::pointer_down(&age)), EventResult::Ignored);

    table.render();
    assert!(table.element().is_some());
    assert_eq!(names(&table), vec!["Cid", "Bob", "Ann"]);
    assert_eq!(table.header_cell("age").unwrap().get_data("order"), Some("desc"));
    assert_eq!(arrows(&table).len(), 1);
}

#[test]
fn test_render_is_idempotent() {
    let mut table = table();
    let html = table.to_html();
    table.render();
    assert_eq!(table.to_html(), html);
}

#[test]
fn test_destroy_consumes_table() {
    let table = table();
    let snapshot = table.snapshot();
    table.destroy();
    // Only the caller's handle remains
    assert_eq!(Arc::strong_count(&snapshot), 1);
}

#[test]
fn test_external_controller_can_toggle_classes() {
    let mut table = table();
    table
        .sub_element_mut(markers::LOADING)
        .unwrap()
        .add_class("sortable-table_loading");
    assert!(table.sub_element(markers::LOADING).unwrap().has_class("sortable-table_loading"));
}
