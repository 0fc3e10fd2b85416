use super::*;

#[test]
fn test_get_store_dir() {
    let dir = get_store_dir();
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.to_string_lossy().contains(STORE_DIR));
}

#[test]
fn test_get_log_dir() {
    let dir = get_log_dir();
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.to_string_lossy().contains(LOG_DIR));
}

#[test]
fn test_ensure_dir_creates_missing_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("a").join("b");

    let created = ensure_dir(Some(target.clone()), "test").unwrap();
    assert_eq!(created, target);
    assert!(target.is_dir());
}

#[test]
fn test_ensure_dir_without_location_fails() {
    let err = ensure_dir(None, "test").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
