//! In-memory store implementation
//!
//! One reader/writer lock guards the whole bucket map.

use ephemeral_core::{Bucket, BucketInfo, Result, StoreError, Value};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::trait_::{BucketStore, SharedStore};

/// In-memory store implementation
#[derive(Debug, Default)]
pub struct MemoryStore {
    buckets: RwLock<HashMap<String, Bucket>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Every write is a single map operation, so a panic elsewhere cannot
    // leave the map half-updated; a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Bucket>> {
        self.buckets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Bucket>> {
        self.buckets.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

// A string-keyed map of `Value`s always encodes, so the error arm is unreachable.
fn encoded_len(contents: &Bucket) -> usize {
    serde_json::to_vec(contents).map(|bytes| bytes.len()).unwrap_or(0)
}

impl BucketStore for MemoryStore {
    fn set(&self, bucket: &str, key: &str, value: Value) {
        let mut buckets = self.write();
        let created = !buckets.contains_key(bucket);
        buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), value);
        debug!(bucket, key, created, "value set");
    }

    fn get(&self, bucket: &str, key: &str) -> Option<Value> {
        let buckets = self.read();
        buckets.get(bucket)?.get(key).cloned()
    }

    fn get_all(&self, bucket: &str) -> Result<Vec<(String, Value)>> {
        let buckets = self.read();
        let contents = buckets
            .get(bucket)
            .ok_or_else(|| StoreError::BucketNotFound(bucket.to_string()))?;
        if contents.is_empty() {
            return Err(StoreError::BucketEmpty(bucket.to_string()));
        }
        Ok(contents
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn bucket_exists(&self, bucket: &str) -> bool {
        self.read().contains_key(bucket)
    }

    fn delete_bucket(&self, bucket: &str) {
        let removed = self.write().remove(bucket).is_some();
        debug!(bucket, removed, "bucket deleted");
    }

    fn list_buckets(&self) -> Vec<BucketInfo> {
        let buckets = self.read();
        let mut infos: Vec<BucketInfo> = buckets
            .iter()
            .map(|(name, contents)| BucketInfo {
                name: name.clone(),
                key_count: contents.len(),
                approx_size_bytes: encoded_len(contents),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    fn export_bucket(&self, bucket: &str) -> Result<Bucket> {
        self.read()
            .get(bucket)
            .cloned()
            .ok_or_else(|| StoreError::BucketNotFound(bucket.to_string()))
    }

    fn replace_bucket(&self, bucket: &str, contents: Bucket) {
        let keys = contents.len();
        let previous = self.write().insert(bucket.to_string(), contents);
        debug!(bucket, keys, replaced = previous.is_some(), "bucket replaced");
    }
}

/// Create a new shared in-memory store
pub fn create_memory_store() -> SharedStore {
    Arc::new(MemoryStore::new())
}
