//! Error types for snapshot output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to write snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to stream snapshot: {0}")]
    Stream(#[from] std::io::Error),

    #[error("Invalid snapshot settings: {what}")]
    InvalidSettings { what: String },
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;
