//! JSON snapshot implementation
//!
//! One bucket per file, written as a pretty-printed (2-space) JSON object.
//! Writes are not atomic: a failed save may leave a truncated file behind,
//! which must be rewritten rather than loaded.

use ephemeral_core::{Bucket, Result, StoreConfig, StoreError, validate_name};
use ephemeral_storage::BucketStore;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Saves and restores individual buckets as JSON files
#[derive(Debug, Clone, Default)]
pub struct JsonSnapshotter {
    config: StoreConfig,
}

impl JsonSnapshotter {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Full path a snapshot name resolves to.
    pub fn snapshot_path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.config.resolve(path)
    }

    /// Write `bucket` to `path` and return the number of bytes written.
    pub fn save_bucket<S>(&self, store: &S, bucket: &str, path: impl AsRef<Path>) -> Result<usize>
    where
        S: BucketStore + ?Sized,
    {
        let contents = store.export_bucket(bucket)?;
        let data = serde_json::to_vec_pretty(&contents).map_err(StoreError::Serialization)?;

        let path = self.snapshot_path(path);
        if self.config.create_data_dir
            && let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        fs::write(&path, &data).map_err(|e| StoreError::io(&path, e))?;

        info!(bucket, path = %path.display(), bytes = data.len(), "bucket saved");
        Ok(data.len())
    }

    /// Replace `bucket` with the contents of the JSON object at `path`.
    ///
    /// The store is left untouched unless the whole file decodes and every
    /// key in it is non-empty.
    pub fn load_bucket<S>(&self, store: &S, bucket: &str, path: impl AsRef<Path>) -> Result<()>
    where
        S: BucketStore + ?Sized,
    {
        validate_name("bucket", bucket)?;

        let path = self.snapshot_path(path);
        let contents = match Self::read_snapshot(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(bucket, path = %path.display(), error = %e, "bucket load failed");
                return Err(e);
            }
        };

        let keys = contents.len();
        store.replace_bucket(bucket, contents);

        info!(bucket, path = %path.display(), keys, "bucket loaded");
        Ok(())
    }

    fn read_snapshot(path: &Path) -> Result<Bucket> {
        let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
        let metadata = file.metadata().map_err(|e| StoreError::io(path, e))?;
        if metadata.is_dir() {
            return Err(StoreError::io(
                path,
                io::Error::new(io::ErrorKind::IsADirectory, "is a directory"),
            ));
        }
        if metadata.len() == 0 {
            return Err(StoreError::EmptyFile(path.to_path_buf()));
        }

        let contents: Bucket = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                StoreError::io(path, source.into())
            } else {
                StoreError::Deserialization {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        if contents.keys().any(|key| key.is_empty()) {
            return Err(StoreError::InvalidArgument(format!(
                "{} contains an empty key",
                path.display()
            )));
        }
        Ok(contents)
    }
}

/// Create a snapshotter rooted at the given storage directory
pub fn create_json_snapshotter(data_dir: impl Into<PathBuf>) -> JsonSnapshotter {
    JsonSnapshotter::new(StoreConfig::with_data_dir(data_dir))
}
