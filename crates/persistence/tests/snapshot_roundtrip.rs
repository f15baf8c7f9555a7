//! End-to-end save/load scenarios across independent stores

use ephemeral_core::{StoreConfig, StoreError, Value};
use ephemeral_persistence::{JsonSnapshotter, SnapshotExt};
use ephemeral_storage::{BucketStore, MemoryStore, create_memory_store};
use serde_json::json;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn snapshotter(temp_dir: &TempDir) -> JsonSnapshotter {
    JsonSnapshotter::new(StoreConfig::with_data_dir(temp_dir.path().join("data")))
}

#[test]
fn test_users_scenario() -> anyhow::Result<()> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let snapshotter = snapshotter(&temp_dir);

    let store = MemoryStore::new();
    store.set("users", "alice", json!({"age": 30}));
    assert_eq!(store.get("users", "alice"), Some(json!({"age": 30})));

    store.save_bucket(&snapshotter, "users", "users.json")?;

    let on_disk: Value = serde_json::from_str(&fs::read_to_string(
        snapshotter.snapshot_path("users.json"),
    )?)?;
    assert_eq!(on_disk, json!({"alice": {"age": 30}}));

    let fresh = MemoryStore::new();
    fresh.load_bucket(&snapshotter, "users", "users.json")?;
    assert_eq!(fresh.get("users", "alice"), Some(json!({"age": 30})));
    Ok(())
}

#[test]
fn test_round_trip_into_different_bucket() -> anyhow::Result<()> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let snapshotter = snapshotter(&temp_dir);

    let values = vec![
        ("null", json!(null)),
        ("bool", json!(false)),
        ("int", json!(-7)),
        ("float", json!(3.25)),
        ("string", json!("héllo \"quoted\"")),
        ("array", json!([1, "two", [3], {"four": 4}])),
        ("object", json!({"deep": {"deeper": {"deepest": [true, null]}}})),
    ];

    let store = create_memory_store();
    for (key, value) in &values {
        store.set("source", key, value.clone());
    }

    store.save_bucket(&snapshotter, "source", "source.json")?;
    store.load_bucket(&snapshotter, "copy", "source.json")?;

    for (key, value) in &values {
        assert_eq!(store.get("copy", key).as_ref(), Some(value), "key {key}");
    }
    assert_eq!(store.export_bucket("copy")?, store.export_bucket("source")?);
    Ok(())
}

#[test]
fn test_missing_file_leaves_store_unchanged() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let snapshotter = snapshotter(&temp_dir);
    let store = MemoryStore::new();
    store.set("x", "k", json!("before"));

    let err = store.load_bucket(&snapshotter, "x", "nonexistent.json").unwrap_err();

    assert!(matches!(err, StoreError::Io { .. }));
    assert_eq!(store.get("x", "k"), Some(json!("before")));
    assert_eq!(store.list_buckets().len(), 1);
}

#[test]
fn test_empty_file_is_rejected() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let snapshotter = snapshotter(&temp_dir);
    let path = snapshotter.snapshot_path("empty.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "").unwrap();

    let store = MemoryStore::new();
    let err = store.load_bucket(&snapshotter, "x", "empty.json").unwrap_err();

    assert!(matches!(err, StoreError::EmptyFile(_)));
}

#[test]
fn test_save_reports_bytes_written() {
    let temp_dir = TempDir::new().unwrap();
    let snapshotter = snapshotter(&temp_dir);
    let store = MemoryStore::new();
    store.set("b", "a", json!(1));
    store.set("b", "b", json!([1, 2]));

    let written = store.save_bucket(&snapshotter, "b", "b.json").unwrap();

    let metadata = fs::metadata(snapshotter.snapshot_path("b.json")).unwrap();
    assert_eq!(written as u64, metadata.len());
}

#[test]
fn test_saves_run_alongside_writers() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let snapshotter = Arc::new(snapshotter(&temp_dir));
    let store = Arc::new(MemoryStore::new());
    store.set("live", "seed", json!(0));

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..100 {
                store.set("live", &format!("k{i}"), json!(i));
            }
        })
    };

    let savers: Vec<_> = (0..3)
        .map(|n| {
            let store = Arc::clone(&store);
            let snapshotter = Arc::clone(&snapshotter);
            thread::spawn(move || {
                let name = format!("live-{n}.json");
                for _ in 0..10 {
                    store.save_bucket(&snapshotter, "live", &name).unwrap();
                }
                name
            })
        })
        .collect();

    writer.join().expect("writer thread panicked");
    for saver in savers {
        let name = saver.join().expect("saver thread panicked");
        // every snapshot is a complete, decodable bucket
        let restored = MemoryStore::new();
        restored.load_bucket(&snapshotter, "live", &name).unwrap();
        assert_eq!(restored.get("live", "seed"), Some(json!(0)));
    }
}
