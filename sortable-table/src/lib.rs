//! Data-driven sortable table widget.
//!
//! Given a column schema and a row dataset, renders a styleable table as a
//! [`tabledom`] element tree and re-sorts it in place when a sortable
//! column header is clicked.

pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod sort;

mod events;
mod table;

pub use config::{RowLink, TableConfig, TableSpec};
pub use error::{ConstructionError, SortConfigError};
pub use model::{CellTemplate, ColumnSpec, Dataset, Direction, Row, Schema, SortState, SortType};
pub use table::Table;
