//! Error types for prototype conversion.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for conversion operations.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prototype not found: {0}")]
    SourceMissing(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
