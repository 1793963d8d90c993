//! Error types for checksum manifest building and verification.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while enumerating, hashing, or persisting manifests
#[derive(Debug, Error)]
pub enum ChecksumError {
    #[error("Unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Package path not found: {0}")]
    PackageNotFound(PathBuf),

    #[error("Missing checksum files")]
    MissingBaseline,

    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("Failed to hash {path}: {source}")]
    Hash {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Worker pool initialization failed: {0}")]
    WorkerPool(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
