//! EphemeralDB Persistence - bucket snapshots
//!
//! Explicit, caller-triggered snapshots only:
//! - save one bucket to a JSON file under the storage directory
//! - load one bucket back, replacing its in-memory contents
//!
//! Nothing is persisted implicitly; buckets not saved are lost on exit.

pub mod ext;
pub mod json;

pub use ext::SnapshotExt;
pub use json::{JsonSnapshotter, create_json_snapshotter};
