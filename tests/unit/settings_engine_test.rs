//! Unit tests for the SettingsEngine public API: default loading, window
//! geometry persistence, and reset behavior.

use minibrowser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use minibrowser::types::settings::BrowserSettings;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for
/// the duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(
        settings,
        BrowserSettings::default(),
        "Loading without a config file must return default settings"
    );
    assert_eq!(settings.general.home_url, "http://www.google.com");
}

#[test]
fn test_window_geometry_persists_across_engines() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.update_window(1024.0, 768.0, false);
        engine.save().unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.window.width, 1024.0);
    assert_eq!(settings.window.height, 768.0);
    assert!(!settings.window.maximized);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir
        .path()
        .join("nested")
        .join("deeper")
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    let engine = SettingsEngine::new(Some(path.clone()));

    engine.save().unwrap();
    assert!(std::path::Path::new(&path).exists());
}

#[test]
fn test_reset_restores_defaults_on_disk() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.update_window(640.0, 480.0, false);
        engine.save().unwrap();
        engine.reset().unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    assert_eq!(engine.load().unwrap(), BrowserSettings::default());
}

#[test]
fn test_load_malformed_file_returns_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    let result = engine.load();
    assert!(result.is_err());
}

#[test]
fn test_config_path_is_reported() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in_temp(&dir);
    assert!(engine.get_config_path().ends_with("settings.json"));
}
