//! Sort direction and per-column sort memory.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortConfigError;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    pub fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SortConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(SortConfigError::UnsupportedOrder {
                value: other.to_string(),
            }),
        }
    }
}

/// Which column the header marks as sorted, and the direction each column
/// will resume from when clicked again.
///
/// Directions are remembered per column: sorting another column does not
/// reset them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<String>,
    initial: Option<String>,
    directions: HashMap<String, Direction>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose indicator sits on `column` until the first click.
    pub fn with_initial(column: Option<String>) -> Self {
        Self {
            initial: column,
            ..Default::default()
        }
    }

    /// Column last sorted through the header, if any.
    pub fn active_column(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Column whose header shows the indicator.
    pub fn indicator_column(&self) -> Option<&str> {
        self.active.as_deref().or(self.initial.as_deref())
    }

    /// Remembered direction for a column (`asc` when never sorted).
    pub fn direction(&self, column_id: &str) -> Direction {
        self.directions.get(column_id).copied().unwrap_or_default()
    }

    pub fn set_direction(&mut self, column_id: impl Into<String>, direction: Direction) {
        self.directions.insert(column_id.into(), direction);
    }

    pub fn activate(&mut self, column_id: impl Into<String>) {
        self.active = Some(column_id.into());
    }
}
