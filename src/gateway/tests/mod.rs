//! Unit tests for the gateway. Process control and compositor detection are
//! environment-dependent and only covered where they are deterministic.

#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::gateway::{Compositor, FsGateway, Gateway, WaybarPaths};

#[test]
fn compositor_names_map_case_insensitively() {
    assert_eq!(Compositor::from("hyprland"), Compositor::Hyprland);
    assert_eq!(Compositor::from("Hyprland"), Compositor::Hyprland);
    assert_eq!(Compositor::from("HYPRLAND"), Compositor::Hyprland);
    assert_eq!(Compositor::from("sway"), Compositor::Sway);
    assert_eq!(Compositor::from("river"), Compositor::River);
    assert_eq!(Compositor::from("dwl"), Compositor::Dwl);
    assert_eq!(Compositor::from("niri"), Compositor::Niri);
    assert_eq!(Compositor::from("gnome"), Compositor::Unknown);
    assert!(!Compositor::Unknown.is_known());
}

#[test]
fn config_file_detection_prefers_jsonc() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config"), "{}").unwrap();
    fs::write(dir.path().join("config.jsonc"), "{}").unwrap();

    let detected = WaybarPaths::detect_config_file(dir.path()).unwrap();
    assert_eq!(detected.file_name().unwrap(), "config.jsonc");
}

#[test]
fn config_file_detection_falls_back_to_bare_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config"), "{}").unwrap();

    let detected = WaybarPaths::detect_config_file(dir.path()).unwrap();
    assert_eq!(detected.file_name().unwrap(), "config");
}

#[tokio::test]
async fn save_creates_a_backup_of_the_previous_content() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.jsonc");
    let gateway = FsGateway::new();

    gateway.save_config(&config, "first").await.unwrap();
    gateway.save_config(&config, "second").await.unwrap();

    assert_eq!(fs::read_to_string(&config).unwrap(), "second");

    let backups = gateway.list_backups(dir.path()).await.unwrap();
    assert_eq!(backups.len(), 1);
    assert!(backups[0].contains(".backup."));

    let backup_content = fs::read_to_string(dir.path().join(&backups[0])).unwrap();
    assert_eq!(backup_content, "first");
}

#[tokio::test]
async fn first_save_into_missing_directory_succeeds_without_backup() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("waybar").join("config.jsonc");
    let gateway = FsGateway::new();

    gateway.save_config(&config, "{}").await.unwrap();

    assert_eq!(fs::read_to_string(&config).unwrap(), "{}");
    let backups = gateway
        .list_backups(&dir.path().join("waybar"))
        .await
        .unwrap();
    assert!(backups.is_empty());
}

#[tokio::test]
async fn restore_backup_backs_up_the_current_file_first() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.jsonc");
    let backup = dir.path().join("config.jsonc.backup.20250101-000000");
    fs::write(&config, "current").unwrap();
    fs::write(&backup, "older").unwrap();

    let gateway = FsGateway::new();
    gateway.restore_backup(&backup, &config).await.unwrap();

    assert_eq!(fs::read_to_string(&config).unwrap(), "older");
    // The pre-restore content survives as a fresh backup.
    let backups = gateway.list_backups(dir.path()).await.unwrap();
    assert_eq!(backups.len(), 2);
}

#[tokio::test]
async fn loading_a_missing_file_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let gateway = FsGateway::new();

    let error = gateway
        .load_config(&dir.path().join("absent.jsonc"))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        crate::gateway::GatewayError::NotFound { .. }
    ));
}
