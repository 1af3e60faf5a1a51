// File: src/error.rs
use thiserror::Error;

/// Result type for table loading and decoder construction.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Failure to produce a usable class table or decoder.
///
/// Decoding itself never fails; only construction can.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The resource could not be opened, read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The header row does not name a required column
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A data row is unusable
    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// The resource holds no class rows
    #[error("Class table is empty")]
    EmptyTable,

    /// A JSON table or config did not parse
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A binary table snapshot did not (de)serialize
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    /// The decoder configuration is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}
