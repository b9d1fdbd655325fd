//! Event handling for the table: one delegated handler for the whole header.

use tabledom::{Element, Event, EventResult, closest};

use crate::render::{data, markers};
use crate::table::Table;

fn is_sortable_cell(element: &Element) -> bool {
    element.get_data(data::SORTABLE) == Some("true") && element.get_data(data::ID).is_some()
}

impl Table {
    /// Route a host event into the table.
    ///
    /// Pointer-down and click events targeting the header (or anything
    /// inside it) are handled; everything else is ignored.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::PointerDown {
                target: Some(target),
                ..
            }
            | Event::Click {
                target: Some(target),
                ..
            } => self.on_header_pointer_down(target),
            _ => EventResult::Ignored,
        }
    }

    /// Handle a pointer-down on `target_id`.
    ///
    /// Resolves the sortable header cell containing the target, flips that
    /// column's remembered direction, sorts, re-renders the body and moves
    /// the indicator to the clicked cell.
    pub fn on_header_pointer_down(&mut self, target_id: &str) -> EventResult {
        let Some(header) = self.sub_element(markers::HEADER) else {
            return EventResult::Ignored;
        };
        let Some(column_id) = closest(header, target_id, is_sortable_cell)
            .and_then(|cell| cell.get_data(data::ID))
            .map(str::to_string)
        else {
            return EventResult::Ignored;
        };

        // The markup says sortable; make sure the schema agrees
        if !self
            .schema()
            .column(&column_id)
            .is_some_and(|column| column.sortable)
        {
            return EventResult::Ignored;
        }

        let direction = self.sort_state().direction(&column_id).toggle();
        if let Err(err) = self.sort(&column_id, direction) {
            log::warn!("[table] header sort on '{}' failed: {}", column_id, err);
            return EventResult::Ignored;
        }

        let state = self.state_mut();
        state.set_direction(column_id.as_str(), direction);
        state.activate(column_id.as_str());
        self.update_header();

        log::debug!("[table] header click sorted '{}' {}", column_id, direction);
        EventResult::Consumed
    }
}
