use crate::error::DirectionParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The direction of a trade relationship, as seen from the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Import,
    Export,
}

impl Direction {
    /// Every known direction, in the order a UI should offer them.
    pub const ALL: [Direction; 2] = [Direction::Import, Direction::Export];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Import => "Import",
            Direction::Export => "Export",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "import" => Ok(Direction::Import),
            "export" => Ok(Direction::Export),
            _ => Err(DirectionParseError(s.to_string())),
        }
    }
}

/// A single reporter -> partner trade relationship.
///
/// Rows are assumed complete and normalized (trimmed names, no aggregate
/// sentinels); the loader is responsible for that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationRow {
    pub reporter: String,
    pub partner: String,
    pub direction: Direction,
    pub value: f64,
}

impl RelationRow {
    pub fn new(
        reporter: impl Into<String>,
        partner: impl Into<String>,
        direction: Direction,
        value: f64,
    ) -> Self {
        Self {
            reporter: reporter.into(),
            partner: partner.into(),
            direction,
            value,
        }
    }
}
