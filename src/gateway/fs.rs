use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tracing::{debug, info};

use super::{Compositor, Gateway, GatewayError, WaybarPaths, compositor, process};

/// Gateway implementation backed by the real filesystem and process table.
///
/// Every write creates a timestamped `.backup.` copy of the previous file
/// content next to it, so a bad save is always recoverable from the same
/// directory.
#[derive(Debug, Default, Clone)]
pub struct FsGateway;

impl FsGateway {
    /// Creates the filesystem gateway.
    pub fn new() -> Self {
        Self
    }

    async fn read_file(path: &Path) -> Result<String, GatewayError> {
        fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::from_io(path, &e))
    }

    async fn write_with_backup(path: &Path, content: &str) -> Result<(), GatewayError> {
        if fs::try_exists(path)
            .await
            .map_err(|e| GatewayError::from_io(path, &e))?
        {
            let backup = backup_path(path);
            fs::copy(path, &backup)
                .await
                .map_err(|e| GatewayError::from_io(&backup, &e))?;
            debug!(backup = %backup.display(), "created backup before write");
        } else if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| GatewayError::from_io(parent, &e))?;
        }

        fs::write(path, content)
            .await
            .map_err(|e| GatewayError::from_io(path, &e))
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let timestamp = Utc::now().format("%Y%m%d-%H%M%S");
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());
    path.with_file_name(format!("{file_name}.backup.{timestamp}"))
}

#[async_trait]
impl Gateway for FsGateway {
    async fn detect_paths(&self) -> Result<WaybarPaths, GatewayError> {
        let mut paths = WaybarPaths::defaults()?;

        if !paths.config_dir_exists() {
            return Err(GatewayError::ConfigDirMissing {
                path: paths.config_dir,
            });
        }

        if let Some(actual) = WaybarPaths::detect_config_file(&paths.config_dir) {
            paths.config_file = actual;
        }

        Ok(paths)
    }

    async fn load_config(&self, path: &Path) -> Result<String, GatewayError> {
        Self::read_file(path).await
    }

    async fn save_config(&self, path: &Path, content: &str) -> Result<(), GatewayError> {
        Self::write_with_backup(path, content).await?;
        info!(path = %path.display(), "wrote native configuration");
        Ok(())
    }

    async fn load_style(&self, path: &Path) -> Result<String, GatewayError> {
        Self::read_file(path).await
    }

    async fn save_style(&self, path: &Path, content: &str) -> Result<(), GatewayError> {
        Self::write_with_backup(path, content).await?;
        info!(path = %path.display(), "wrote stylesheet");
        Ok(())
    }

    async fn list_backups(&self, dir: &Path) -> Result<Vec<String>, GatewayError> {
        let mut entries = fs::read_dir(dir)
            .await
            .map_err(|e| GatewayError::from_io(dir, &e))?;

        let mut backups = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| GatewayError::from_io(dir, &e))?
        {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if file_name.contains(".backup.") {
                backups.push(file_name);
            }
        }

        // Timestamped suffixes sort chronologically; newest first.
        backups.sort_by(|a, b| b.cmp(a));
        Ok(backups)
    }

    async fn restore_backup(&self, backup: &Path, target: &Path) -> Result<(), GatewayError> {
        let content = Self::read_file(backup).await?;
        Self::write_with_backup(target, &content).await?;
        info!(
            backup = %backup.display(),
            target = %target.display(),
            "restored backup"
        );
        Ok(())
    }

    async fn reload_renderer(&self) -> Result<(), GatewayError> {
        process::reload().await
    }

    async fn start_renderer(&self) -> Result<(), GatewayError> {
        process::start().await
    }

    async fn stop_renderer(&self) -> Result<(), GatewayError> {
        process::stop().await
    }

    async fn restart_renderer(&self) -> Result<(), GatewayError> {
        process::restart().await
    }

    async fn renderer_running(&self) -> Result<bool, GatewayError> {
        process::is_running().await
    }

    async fn detect_compositor(&self) -> Result<Compositor, GatewayError> {
        compositor::detect().await
    }
}
