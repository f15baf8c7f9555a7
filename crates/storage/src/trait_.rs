//! Store trait definition
//!
//! Abstract interface over a bucket -> key -> value store

use ephemeral_core::{Bucket, BucketInfo, Result, Value};
use std::sync::Arc;

/// Bucket store
///
/// All operations are synchronous and complete before returning. Reads may
/// run concurrently with each other; writes exclude everything else.
pub trait BucketStore: Send + Sync {
    /// Insert or overwrite `value` at `key`, creating the bucket if needed.
    fn set(&self, bucket: &str, key: &str, value: Value);

    /// Value stored at `key`, or `None` if the bucket or key is absent.
    fn get(&self, bucket: &str, key: &str) -> Option<Value>;

    /// All entries of a bucket in key order.
    ///
    /// Fails with `BucketNotFound` for an absent bucket and `BucketEmpty`
    /// for a bucket that exists but has no keys.
    fn get_all(&self, bucket: &str) -> Result<Vec<(String, Value)>>;

    fn bucket_exists(&self, bucket: &str) -> bool;

    /// Remove a bucket and everything in it. Missing buckets are ignored.
    fn delete_bucket(&self, bucket: &str);

    /// One entry per bucket, sorted by name.
    fn list_buckets(&self) -> Vec<BucketInfo>;

    /// Copy of a bucket's full contents.
    fn export_bucket(&self, bucket: &str) -> Result<Bucket>;

    /// Replace a bucket's contents wholesale, creating it if needed.
    fn replace_bucket(&self, bucket: &str, contents: Bucket);
}

/// Shared store reference
pub type SharedStore = Arc<dyn BucketStore>;
