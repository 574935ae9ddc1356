use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading raw trade records into a relation store.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read CSV dataset '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Dataset source '{}' is neither a file nor a directory", .0.display())]
    InvalidSource(PathBuf),
}

/// Errors that can occur while saving or loading a binary relation snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Could not access snapshot file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Snapshot serialization failed: {0}")]
    Encode(String),

    #[error("Snapshot deserialization failed: {0}")]
    Decode(String),
}

/// Errors that can occur while building a flow configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("A color palette needs at least one color")]
    EmptyPalette,

    #[error("Failed to read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config file '{path}': {message}")]
    Parse { path: String, message: String },
}

/// Returned when a trade direction token is not one of the known directions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized trade direction '{0}', expected 'Import' or 'Export'")]
pub struct DirectionParseError(pub String);
