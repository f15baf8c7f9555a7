//! Bucket data model
//!
//! A bucket is a named key -> JSON value namespace. Values are plain
//! `serde_json::Value`s: null, bool, number, string, array or object.

use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};

pub use serde_json::Value;

/// Contents of one bucket, ordered by key
pub type Bucket = serde_json::Map<String, Value>;

/// Summary of one bucket, as reported by a bucket listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketInfo {
    /// Bucket name
    pub name: String,

    /// Number of keys
    pub key_count: usize,

    /// Length in bytes of the compact JSON encoding of the contents
    pub approx_size_bytes: usize,
}

impl BucketInfo {
    /// Size in KiB, for display.
    pub fn approx_kib(&self) -> f64 {
        self.approx_size_bytes as f64 / 1024.0
    }
}

/// Check a bucket name or key before handing it to the store.
pub fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(StoreError::InvalidArgument(format!("{} must not be empty", kind)));
    }
    Ok(())
}

/// Decode user-supplied JSON text into a value.
///
/// Surrounding whitespace is ignored; blank input is rejected.
pub fn parse_value(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidArgument(
            "the input value cannot be empty".to_string(),
        ));
    }
    serde_json::from_str(trimmed).map_err(|source| StoreError::Deserialization {
        path: "<input>".into(),
        source,
    })
}
