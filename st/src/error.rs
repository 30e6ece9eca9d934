//! Progress store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, validating or saving progress
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed progress file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value: {0}")]
    Validation(String),
}
