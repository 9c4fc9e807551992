//! Unit tests for the CLI command system.

#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::commands::modules::{DescribeCommand, ListCommand};
use crate::cli::{CliContext, CliError, CliService, Command};
use crate::editor::EditorStore;
use crate::gateway::{Compositor, Gateway, GatewayError, WaybarPaths};

struct StubGateway;

#[async_trait]
impl Gateway for StubGateway {
    async fn detect_paths(&self) -> Result<WaybarPaths, GatewayError> {
        Ok(test_paths())
    }
    async fn load_config(&self, path: &Path) -> Result<String, GatewayError> {
        Err(GatewayError::NotFound {
            path: path.to_path_buf(),
        })
    }
    async fn save_config(&self, _path: &Path, _content: &str) -> Result<(), GatewayError> {
        Ok(())
    }
    async fn load_style(&self, path: &Path) -> Result<String, GatewayError> {
        Err(GatewayError::NotFound {
            path: path.to_path_buf(),
        })
    }
    async fn save_style(&self, _path: &Path, _content: &str) -> Result<(), GatewayError> {
        Ok(())
    }
    async fn list_backups(&self, _dir: &Path) -> Result<Vec<String>, GatewayError> {
        Ok(vec![])
    }
    async fn restore_backup(&self, _backup: &Path, _target: &Path) -> Result<(), GatewayError> {
        Ok(())
    }
    async fn reload_renderer(&self) -> Result<(), GatewayError> {
        Ok(())
    }
    async fn start_renderer(&self) -> Result<(), GatewayError> {
        Ok(())
    }
    async fn stop_renderer(&self) -> Result<(), GatewayError> {
        Ok(())
    }
    async fn restart_renderer(&self) -> Result<(), GatewayError> {
        Ok(())
    }
    async fn renderer_running(&self) -> Result<bool, GatewayError> {
        Ok(false)
    }
    async fn detect_compositor(&self) -> Result<Compositor, GatewayError> {
        Ok(Compositor::Unknown)
    }
}

fn test_paths() -> WaybarPaths {
    WaybarPaths {
        config_dir: PathBuf::from("/tmp/waybar"),
        config_file: PathBuf::from("/tmp/waybar/config.jsonc"),
        style_file: PathBuf::from("/tmp/waybar/style.css"),
    }
}

fn service() -> CliService {
    let gateway: Arc<dyn Gateway> = Arc::new(StubGateway);
    let store = EditorStore::new(Arc::clone(&gateway));
    CliService::new(CliContext::new(store, gateway, test_paths()))
}

#[tokio::test]
async fn help_lists_every_category() {
    let service = service();
    let help = service.help_text();

    for category in ["config", "waybar", "backup", "modules"] {
        assert!(help.contains(category), "help is missing '{category}'");
    }
}

#[tokio::test]
async fn unknown_category_and_command_are_reported() {
    let service = service();

    let missing_category = service.execute_command("nope", "x", &[]).await;
    assert!(matches!(
        missing_category,
        Err(CliError::CommandNotFound(_))
    ));

    let missing_command = service.execute_command("config", "nope", &[]).await;
    assert!(matches!(missing_command, Err(CliError::CommandNotFound(_))));
}

#[tokio::test]
async fn argument_counts_are_validated_from_metadata() {
    let service = service();

    // 'modules describe' requires exactly one argument.
    let too_few = service.execute_command("modules", "describe", &[]).await;
    assert!(matches!(too_few, Err(CliError::InvalidArguments(_))));

    let too_many = service
        .execute_command(
            "modules",
            "describe",
            &["battery".to_string(), "clock".to_string()],
        )
        .await;
    assert!(matches!(too_many, Err(CliError::InvalidArguments(_))));
}

#[tokio::test]
async fn modules_list_groups_by_category() {
    let output = ListCommand.execute(&[]).await.unwrap();

    assert!(output.contains("battery"));
    assert!(output.contains("hyprland/workspaces"));
    assert!(output.contains("window manager"));
}

#[tokio::test]
async fn modules_describe_shows_fields_and_defaults() {
    let output = DescribeCommand
        .execute(&["battery".to_string()])
        .await
        .unwrap();

    assert!(output.contains("interval"));
    assert!(output.contains("default: 60"));
    assert!(output.contains("full-at"));

    let unknown = DescribeCommand.execute(&["warp-drive".to_string()]).await;
    assert!(matches!(unknown, Err(CliError::InvalidArguments(_))));
}

#[tokio::test]
async fn waybar_status_reports_through_the_gateway() {
    let service = service();
    let output = service
        .execute_command("waybar", "status", &[])
        .await
        .unwrap();

    assert!(output.contains("not running"));
    assert!(output.contains("unknown"));
}
