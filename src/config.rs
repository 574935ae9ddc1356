use crate::error::ConfigError;
use crate::graph::Palette;
use crate::relation::DatasetLoader;
use crate::relation::loader::{DEFAULT_IGNORED, DEFAULT_YEAR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Depth bound used by default; large enough to exhaust realistic partner graphs.
pub const DEFAULT_MAX_DEPTH: usize = 100;
/// Number of trace rows shown by default in the tabular display.
pub const DEFAULT_TABLE_ROWS: usize = 20;

/// Runtime configuration for tracing, coloring and dataset loading.
///
/// Every field has a default, so a config file only needs the keys it changes:
///
/// ```json
/// { "max_depth": 3, "node_limit": 500, "palette": ["#111", "#999"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Levels beyond this are not expanded.
    pub max_depth: usize,
    /// Optional cap on the number of traced partners per query.
    pub node_limit: Option<usize>,
    /// Node colors, applied cyclically by depth. Must not be empty.
    pub palette: Palette,
    /// Rows shown by the trace table formatter.
    pub table_rows: usize,
    /// Year column the dataset loader reads values from.
    pub year: String,
    /// Aggregate names the dataset loader drops.
    pub ignored: Vec<String>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            node_limit: None,
            palette: Palette::default(),
            table_rows: DEFAULT_TABLE_ROWS,
            year: DEFAULT_YEAR.to_string(),
            ignored: DEFAULT_IGNORED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FlowConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// A dataset loader honoring this configuration's year and ignore list.
    pub fn loader(&self) -> DatasetLoader {
        DatasetLoader::new()
            .with_year(&self.year)
            .with_ignored(self.ignored.iter().cloned())
    }
}
