use serde::{Deserialize, Serialize};

use super::module::ModuleInstance;
use super::{generate_id, ids};

/// Layer the bar is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Above regular windows.
    Top,
    /// Below regular windows.
    Bottom,
    /// Above fullscreen windows.
    Overlay,
}

/// Screen edge the bar is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Top edge of the output.
    Top,
    /// Bottom edge of the output.
    Bottom,
    /// Left edge of the output.
    Left,
    /// Right edge of the output.
    Right,
}

/// Display mode of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    /// Permanently visible, reserving space.
    Dock,
    /// Hidden until summoned.
    Hide,
    /// Never visible.
    Invisible,
    /// Visible without reserving space.
    Overlay,
}

/// Which output(s) the bar appears on.
///
/// Waybar accepts either a single output name or a list of them for the
/// `output` key, so both shapes round-trip through the native format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputSelector {
    /// A single output, e.g. `"DP-1"`.
    One(String),
    /// Several outputs; `!name` entries exclude an output.
    Many(Vec<String>),
}

/// Bar-level configuration: positioning, dimensions, spacing, and behavior.
///
/// Field names serialize to the exact native key spelling, so this struct can
/// be merged directly into the top level of a native bar object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Render layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<Layer>,

    /// Anchored screen edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Edge>,

    /// Output selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputSelector>,

    /// Bar height in pixels; 0 means automatic in Waybar, which the
    /// validation engine rejects for edited documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Bar width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Shorthand margin string, e.g. `"5 10"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,

    /// Top margin in pixels.
    #[serde(rename = "margin-top", skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<i32>,

    /// Bottom margin in pixels.
    #[serde(rename = "margin-bottom", skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<i32>,

    /// Left margin in pixels.
    #[serde(rename = "margin-left", skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<i32>,

    /// Right margin in pixels.
    #[serde(rename = "margin-right", skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<i32>,

    /// Spacing between modules in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<u32>,

    /// Display mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<BarMode>,

    /// Whether the bar reserves exclusive space on its edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive: Option<bool>,

    /// Whether pointer events pass through the bar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passthrough: Option<bool>,

    /// Whether to use the gtk-layer-shell protocol.
    #[serde(rename = "gtk-layer-shell", skip_serializing_if = "Option::is_none")]
    pub gtk_layer_shell: Option<bool>,

    /// Whether the bar listens for IPC commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipc: Option<bool>,

    /// Whether Waybar reloads automatically when the stylesheet changes.
    #[serde(
        rename = "reload_style_on_change",
        skip_serializing_if = "Option::is_none"
    )]
    pub reload_style_on_change: Option<bool>,
}

/// One configured bar and the modules it owns.
///
/// A bar exclusively owns its modules: deleting the bar deletes them, and
/// duplicating the bar deep-clones them under fresh ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDefinition {
    /// Opaque unique identifier, internal to the editor.
    pub id: String,

    /// Optional display name; also emitted as the native `name` key.
    pub name: Option<String>,

    /// Whether the bar is included when exporting to the native format.
    pub enabled: bool,

    /// Position in the bar sequence, maintained by the store.
    pub order: usize,

    /// Bar-level configuration.
    pub config: BarConfig,

    /// Modules owned by this bar.
    pub modules: Vec<ModuleInstance>,
}

impl BarDefinition {
    /// Creates an empty enabled bar with a fresh id.
    pub fn new(name: Option<String>, order: usize) -> Self {
        Self {
            id: generate_id(ids::BAR_PREFIX),
            name,
            enabled: true,
            order,
            config: BarConfig::default(),
            modules: Vec::new(),
        }
    }

    /// Looks up an owned module by id.
    pub fn module(&self, module_id: &str) -> Option<&ModuleInstance> {
        self.modules.iter().find(|module| module.id == module_id)
    }

    /// Looks up an owned module by id for mutation.
    pub fn module_mut(&mut self, module_id: &str) -> Option<&mut ModuleInstance> {
        self.modules
            .iter_mut()
            .find(|module| module.id == module_id)
    }
}
