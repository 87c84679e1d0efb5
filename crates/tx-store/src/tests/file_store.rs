use crate::{FileStore, KeyValueStore, StoreError};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, some};
use tempfile::TempDir;

fn store_path(temp: &TempDir) -> std::path::PathBuf {
    temp.path().join("profiles.json")
}

#[test]
fn given_missing_file_when_open_then_store_is_empty() {
    let temp = TempDir::new().unwrap();

    let store = FileStore::open(store_path(&temp)).unwrap();

    assert!(store.is_empty());
    assert!(!store_path(&temp).exists());
}

#[test]
fn given_saved_values_when_reopened_then_values_survive() {
    let temp = TempDir::new().unwrap();

    {
        let mut store = FileStore::open(store_path(&temp)).unwrap();
        store.set("currentUser", "ada@x.com").unwrap();
        store.set("user_ada@x.com", r#"{"firstName":"Ada"}"#).unwrap();
    }

    let store = FileStore::open(store_path(&temp)).unwrap();

    assert_that!(store.get("currentUser"), some(eq("ada@x.com")));
    assert_that!(store.get("user_ada@x.com"), some(eq(r#"{"firstName":"Ada"}"#)));
    assert_eq!(store.len(), 2);
}

#[test]
fn given_corrupted_file_when_open_then_empty_store_and_backup_left_on_disk() {
    let temp = TempDir::new().unwrap();
    std::fs::write(store_path(&temp), "{ not json").unwrap();

    let store = FileStore::open(store_path(&temp)).unwrap();

    assert!(store.is_empty());
    assert!(!store_path(&temp).exists());

    let backups: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_name()
                .to_string_lossy()
                .contains("profiles.corrupted.")
        })
        .collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn given_removed_key_when_reopened_then_key_is_gone() {
    let temp = TempDir::new().unwrap();

    {
        let mut store = FileStore::open(store_path(&temp)).unwrap();
        store.set("currentUser", "ada@x.com").unwrap();
        assert_that!(store.remove("currentUser"), some(eq("ada@x.com")));
    }

    let store = FileStore::open(store_path(&temp)).unwrap();

    assert_that!(store.get("currentUser"), none());
}

#[test]
fn given_quota_when_oversized_set_then_error_and_disk_unchanged() {
    let temp = TempDir::new().unwrap();

    let mut store = FileStore::open_with_quota(store_path(&temp), 32).unwrap();
    store.set("k", "fits").unwrap();

    let result = store.set("k2", &"x".repeat(64));

    assert_that!(result, err(anything()));
    assert!(matches!(
        result.unwrap_err(),
        StoreError::QuotaExceeded { quota: 32, .. }
    ));

    // Reader still observes only the first write, in memory and on disk.
    assert_that!(store.get("k2"), none());
    let reopened = FileStore::open(store_path(&temp)).unwrap();
    assert_eq!(reopened.len(), 1);
}

#[test]
fn given_nested_store_path_when_set_then_parent_directories_are_created() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("data").join("store").join("profiles.json");

    let mut store = FileStore::open(nested.clone()).unwrap();
    store.set("k", "v").unwrap();

    assert!(nested.exists());
}

#[test]
fn given_no_leftover_temp_files_after_successful_writes() {
    let temp = TempDir::new().unwrap();

    let mut store = FileStore::open(store_path(&temp)).unwrap();
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
        .collect();
    assert!(leftovers.is_empty());
}
