//! Error types for the triage tool.
//!
//! The pipeline core never fails on a per-message basis — malformed
//! records degrade into the unprocessable partition. These errors cover
//! the environment around it: the source file and the output directory.

use std::path::PathBuf;

/// Top-level error type for the binary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Errors reading the source batch file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Source file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read source file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in source file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Source file must contain a JSON array of message objects")]
    NotAnArray,
}

/// Errors writing the output partitions.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
