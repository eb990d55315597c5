use leadledger_core::{SqliteStorage, StoragePort};

#[test]
fn put_get_overwrite_roundtrip() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();

    storage.put("leads", "[]").unwrap();
    assert_eq!(storage.get("leads").unwrap().as_deref(), Some("[]"));

    storage.put("leads", "[{\"_id\":\"L1\"}]").unwrap();
    assert_eq!(
        storage.get("leads").unwrap().as_deref(),
        Some("[{\"_id\":\"L1\"}]")
    );
}

#[test]
fn remove_and_clear() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    storage.put("a", "1").unwrap();
    storage.put("b", "2").unwrap();

    storage.remove("a").unwrap();
    assert!(storage.get("a").unwrap().is_none());
    // Missing keys are a no-op.
    storage.remove("a").unwrap();

    storage.clear().unwrap();
    assert!(storage.get("b").unwrap().is_none());
}

#[test]
fn values_survive_reopen_of_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leadledger.sqlite3");

    {
        let mut storage = SqliteStorage::open(&path).unwrap();
        storage.put("leads", "[1,2,3]").unwrap();
    }

    let storage = SqliteStorage::open(&path).unwrap();
    assert_eq!(storage.get("leads").unwrap().as_deref(), Some("[1,2,3]"));
}

#[test]
fn reopen_with_current_schema_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leadledger.sqlite3");

    for _ in 0..3 {
        let storage = SqliteStorage::open(&path).unwrap();
        drop(storage);
    }
}
