use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::kind::ModuleKind;
use super::{generate_id, ids};

/// Horizontal zone a module occupies within its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModulePosition {
    /// Left zone.
    Left,
    /// Center zone.
    Center,
    /// Right zone.
    Right,
}

impl ModulePosition {
    /// All zones, in native emission order.
    pub const ALL: &'static [ModulePosition] = &[Self::Left, Self::Center, Self::Right];

    /// The native array key listing this zone's module ids.
    pub fn native_key(self) -> &'static str {
        match self {
            Self::Left => "modules-left",
            Self::Center => "modules-center",
            Self::Right => "modules-right",
        }
    }

    /// Lowercase zone name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Parses a lowercase zone name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for ModulePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One placed module: a typed widget with its position and configuration.
///
/// The `id` exists only inside the editor. In the native format a module is
/// identified by its native id, the `kind` tag optionally suffixed with
/// `#custom_name`, which is why `(kind, custom_name)` must stay unique
/// within a bar (enforced by the validation engine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInstance {
    /// Opaque unique identifier, never emitted to the native format.
    pub id: String,

    /// Module type.
    #[serde(rename = "type")]
    pub kind: ModuleKind,

    /// Disambiguates multiple instances of one kind within a bar.
    pub custom_name: Option<String>,

    /// Zone the module occupies.
    pub position: ModulePosition,

    /// Sequence within the zone, maintained by the store.
    pub order: usize,

    /// Open, kind-dependent configuration payload.
    #[serde(default)]
    pub config: Map<String, Value>,

    /// Whether the module is included when exporting to the native format.
    pub enabled: bool,
}

impl ModuleInstance {
    /// Creates an enabled module with a fresh id and empty configuration.
    pub fn new(kind: ModuleKind, position: ModulePosition, order: usize) -> Self {
        Self {
            id: generate_id(ids::MODULE_PREFIX),
            kind,
            custom_name: None,
            position,
            order,
            config: Map::new(),
            enabled: true,
        }
    }
}
