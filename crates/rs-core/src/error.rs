//! Error types for rsupport

use thiserror::Error;

use crate::scalar::ScalarType;

/// rsupport error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input to a constructor or transform
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed column spec or inconsistent schema
    #[error("Schema error: {0}")]
    Schema(String),

    /// Column lookup miss
    #[error("No such column: {0}")]
    NoSuchColumn(String),

    /// Scalar read or written with the wrong type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Type the caller asked for.
        expected: ScalarType,
        /// Type actually held.
        found: ScalarType,
    },

    /// Value outside the domain of an operation
    #[error("Range error: {0}")]
    Range(String),

    /// Explicitly unsupported mode
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
