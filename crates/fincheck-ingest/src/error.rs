//! Error types for registry ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the registry export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the registry file.
    #[error("failed to read registry file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON.
    #[error("invalid registry JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an array.
    #[error("registry JSON must be an array of records, found {found}")]
    NotAnArray { found: &'static str },

    /// An array entry is not an object.
    #[error("registry entry {index} must be an object, found {found}")]
    NotAnObject { index: usize, found: &'static str },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
