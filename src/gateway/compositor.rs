use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::process::Command;

use super::GatewayError;

/// A Wayland compositor Waybar commonly runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compositor {
    /// Hyprland.
    Hyprland,
    /// Sway.
    Sway,
    /// River.
    River,
    /// Dwl.
    Dwl,
    /// Niri.
    Niri,
    /// Anything else, or no Wayland session at all.
    Unknown,
}

impl Compositor {
    /// Lowercase compositor name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hyprland => "hyprland",
            Self::Sway => "sway",
            Self::River => "river",
            Self::Dwl => "dwl",
            Self::Niri => "niri",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the compositor was actually identified.
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Compositor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Compositor {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "hyprland" => Self::Hyprland,
            "sway" => Self::Sway,
            "river" => Self::River,
            "dwl" => Self::Dwl,
            "niri" => Self::Niri,
            _ => Self::Unknown,
        }
    }
}

/// Detects the running compositor.
///
/// Strategy: confirm a Wayland session via `WAYLAND_DISPLAY`, then try
/// `XDG_CURRENT_DESKTOP`, then fall back to scanning the process list for
/// known compositor names.
pub(super) async fn detect() -> Result<Compositor, GatewayError> {
    if env::var("WAYLAND_DISPLAY").is_err() {
        return Ok(Compositor::Unknown);
    }

    if let Ok(desktop) = env::var("XDG_CURRENT_DESKTOP") {
        let compositor = Compositor::from(desktop.as_str());
        if compositor.is_known() {
            return Ok(compositor);
        }
    }

    detect_from_processes().await
}

async fn detect_from_processes() -> Result<Compositor, GatewayError> {
    let candidates = [
        ("Hyprland", Compositor::Hyprland),
        ("sway", Compositor::Sway),
        ("river", Compositor::River),
        ("dwl", Compositor::Dwl),
        ("niri", Compositor::Niri),
    ];

    for (process_name, compositor) in candidates {
        let output = Command::new("pgrep")
            .arg("-x")
            .arg(process_name)
            .output()
            .await
            .map_err(|e| GatewayError::Process {
                details: format!("failed to execute pgrep: {e}"),
            })?;

        if output.status.success() {
            return Ok(compositor);
        }
    }

    Ok(Compositor::Unknown)
}
