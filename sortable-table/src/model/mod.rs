//! Table schema, row snapshots and sort state.

mod column;
mod dataset;
mod schema;
mod state;

pub use column::{CellTemplate, ColumnSpec, SortType};
pub use dataset::{Dataset, Row};
pub use schema::Schema;
pub use state::{Direction, SortState};
