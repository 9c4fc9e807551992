//! Unit tests for editor settings.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::settings::{LogLevel, Settings, Theme};

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(settings.general.log_level, LogLevel::Info);
    assert_eq!(settings.history.limit, 50);
    assert_eq!(settings.validation.debounce_ms, 300);
    assert_eq!(settings.ui.theme, Theme::System);
}

#[test]
fn partial_file_keeps_defaults_for_missing_sections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[general]
log_level = "debug"

[history]
limit = 10
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.general.log_level, LogLevel::Debug);
    assert_eq!(settings.history.limit, 10);
    assert_eq!(settings.validation.debounce_ms, 300);
}

#[test]
fn invalid_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "history = \"lots\"").unwrap();

    assert!(Settings::load_from(&path).is_err());
}

#[test]
fn settings_round_trip_through_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut settings = Settings::default();
    settings.history.limit = 25;
    settings.ui.sidebar_collapsed = true;
    settings.save_to(&path).unwrap();

    let reloaded = Settings::load_from(&path).unwrap();
    assert_eq!(reloaded.history.limit, 25);
    assert!(reloaded.ui.sidebar_collapsed);
}

#[test]
fn waybar_overrides_replace_detected_paths() {
    let mut settings = Settings::default();
    settings.waybar.config_dir = Some(PathBuf::from("/tmp/waybar-test"));

    let paths = settings.waybar_paths().unwrap();
    assert_eq!(paths.config_dir, PathBuf::from("/tmp/waybar-test"));
    assert_eq!(
        paths.config_file,
        PathBuf::from("/tmp/waybar-test/config.jsonc")
    );

    settings.waybar.style_file = Some(PathBuf::from("/elsewhere/style.css"));
    let paths = settings.waybar_paths().unwrap();
    assert_eq!(paths.style_file, PathBuf::from("/elsewhere/style.css"));
}

#[test]
fn store_options_reflect_settings() {
    let mut settings = Settings::default();
    settings.history.limit = 7;
    settings.validation.debounce_ms = 50;

    let options = settings.store_options();
    assert_eq!(options.history_limit, 7);
    assert_eq!(options.validation_debounce.as_millis(), 50);
}
