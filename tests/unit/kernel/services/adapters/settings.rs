use super::*;
use crate::kernel::services::ports::settings::{DragSettings, LayoutSettings};

#[test]
fn test_settings_path_is_under_app_dir() {
    let path = get_settings_path().unwrap();
    assert!(path.ends_with(".blockdoc/settings.json"));
}

#[test]
fn test_load_settings_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"layout":{"sidebar_width":400}}"#).unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.layout.sidebar_width, 400);
    assert_eq!(settings.layout.sidebar_min_width, 250);
    assert_eq!(settings.drag, DragSettings::default());
}

#[test]
fn test_load_settings_from_invalid_or_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert!(load_settings_from(&path).is_none());

    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_settings_from(&path).is_none());
}

#[test]
fn test_default_settings_serialize_round_trip() {
    let json = serde_json::to_string_pretty(&Settings::default()).unwrap();
    let parsed: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.layout, LayoutSettings::default());
}
