use super::*;
use crate::kernel::services::ports::storage::{read_json, write_json, DOCUMENTS_KEY};
use tempfile::tempdir;

#[test]
fn test_file_store_set_get_remove() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::open(dir.path().join("store")).unwrap();

    assert_eq!(store.get("sidebar-width").unwrap(), None);

    store.set("sidebar-width", "300").unwrap();
    assert_eq!(store.get("sidebar-width").unwrap().as_deref(), Some("300"));

    store.set("sidebar-width", "420").unwrap();
    assert_eq!(store.get("sidebar-width").unwrap().as_deref(), Some("420"));
    assert!(!store.dir().join("sidebar-width.tmp").exists());

    store.remove("sidebar-width").unwrap();
    assert_eq!(store.get("sidebar-width").unwrap(), None);
    store.remove("sidebar-width").unwrap();
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempdir().unwrap();
    {
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("active-document", "abc").unwrap();
    }
    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(store.get("active-document").unwrap().as_deref(), Some("abc"));
}

#[test]
fn test_rejects_path_like_keys() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    assert!(matches!(
        store.set("../escape", "x"),
        Err(StorageError::InvalidKey(_))
    ));

    let mut mem = MemoryStore::new();
    assert!(matches!(mem.set("", "x"), Err(StorageError::InvalidKey(_))));
}

#[test]
fn test_memory_store_json_helpers() {
    let mut store = MemoryStore::new();
    write_json(&mut store, DOCUMENTS_KEY, &vec![1, 2, 3]).unwrap();

    let back: Option<Vec<i32>> = read_json(&store, DOCUMENTS_KEY).unwrap();
    assert_eq!(back, Some(vec![1, 2, 3]));
    assert_eq!(store.len(), 1);

    store.set(DOCUMENTS_KEY, "not json").unwrap();
    let err = read_json::<Vec<i32>>(&store, DOCUMENTS_KEY).unwrap_err();
    assert!(matches!(err, StorageError::Json(_)));
}
