//! Store errors
//!
//! Every failure is scoped to the single requested operation and returned to
//! the caller; nothing in the store retries or recovers on its own.

use std::path::PathBuf;

/// Store error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("bucket '{0}' not found")]
    BucketNotFound(String),

    #[error("bucket '{0}' is empty")]
    BucketEmpty(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("error decoding JSON from {}: {source}", .path.display())]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("error encoding JSON: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the two "nothing to show" outcomes of a bucket read.
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::BucketNotFound(_) | Self::BucketEmpty(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
