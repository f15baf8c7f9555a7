//! Snapshot methods on any bucket store

use crate::json::JsonSnapshotter;
use ephemeral_core::Result;
use ephemeral_storage::BucketStore;
use std::path::Path;

/// Save/load as methods on the store itself
pub trait SnapshotExt: BucketStore {
    /// Snapshot `bucket` to `path`; returns the number of bytes written.
    fn save_bucket(
        &self,
        snapshotter: &JsonSnapshotter,
        bucket: &str,
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        snapshotter.save_bucket(self, bucket, path)
    }

    /// Replace `bucket` with the snapshot at `path`.
    fn load_bucket(
        &self,
        snapshotter: &JsonSnapshotter,
        bucket: &str,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        snapshotter.load_bucket(self, bucket, path)
    }
}

impl<T: BucketStore + ?Sized> SnapshotExt for T {}
