//! Waybar process control via signals.
//!
//! Waybar reloads both its configuration and stylesheet on SIGUSR2, which is
//! the recommended way to apply changes without a restart. Process discovery
//! and signalling go through `pgrep`/`pkill`.

use std::time::Duration;

use tokio::process::Command;

use super::GatewayError;

const RELOAD_SIGNAL: &str = "SIGUSR2";
const WAYBAR_PROCESS: &str = "waybar";

/// Whether a Waybar process is running.
pub(super) async fn is_running() -> Result<bool, GatewayError> {
    let output = Command::new("pgrep")
        .arg(WAYBAR_PROCESS)
        .output()
        .await
        .map_err(|e| GatewayError::Process {
            details: format!("failed to execute pgrep: {e}"),
        })?;

    // pgrep exits 0 when at least one process matched.
    Ok(output.status.success())
}

/// Sends SIGUSR2 so Waybar reloads config and style in place.
///
/// A Waybar that is not running is not an error; there is simply nothing to
/// reload.
pub(super) async fn reload() -> Result<(), GatewayError> {
    if !is_running().await? {
        return Ok(());
    }

    signal(RELOAD_SIGNAL, "reload").await
}

/// Starts Waybar in the background unless it is already running.
pub(super) async fn start() -> Result<(), GatewayError> {
    if is_running().await? {
        return Ok(());
    }

    Command::new(WAYBAR_PROCESS)
        .spawn()
        .map_err(|e| GatewayError::Process {
            details: format!("failed to start waybar: {e}"),
        })?;

    Ok(())
}

/// Stops Waybar with SIGTERM if it is running.
pub(super) async fn stop() -> Result<(), GatewayError> {
    if !is_running().await? {
        return Ok(());
    }

    signal("SIGTERM", "stop").await
}

/// Stops and restarts Waybar, leaving it time to shut down in between.
pub(super) async fn restart() -> Result<(), GatewayError> {
    stop().await?;
    tokio::time::sleep(Duration::from_millis(500)).await;
    start().await
}

async fn signal(name: &str, action: &str) -> Result<(), GatewayError> {
    let output = Command::new("pkill")
        .arg(format!("-{name}"))
        .arg(WAYBAR_PROCESS)
        .output()
        .await
        .map_err(|e| GatewayError::Process {
            details: format!("failed to execute pkill: {e}"),
        })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.trim().is_empty() {
        // pkill exits 1 when no process matched; the earlier is_running
        // check makes that a benign race rather than a failure.
        Ok(())
    } else {
        Err(GatewayError::Process {
            details: format!("failed to {action} waybar: {}", stderr.trim()),
        })
    }
}
