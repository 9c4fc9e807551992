//! Domain model for the Waybar configuration being edited.
//!
//! These types describe the editable document: bars, the modules placed in
//! their zones, structured stylesheet rules, and document metadata. They
//! carry no behavior beyond small accessors; every mutation goes through the
//! editor store so ordering and ownership invariants stay in one place.

mod bar;
mod ids;
mod kind;
mod module;
mod style;

pub use bar::{BarConfig, BarDefinition, BarMode, Edge, Layer, OutputSelector};
pub use ids::generate_id;
pub use kind::{ModuleCategory, ModuleKind};
pub use module::{ModuleInstance, ModulePosition};
pub use style::{CssProperty, StyleDefinition};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema version written into [`ConfigMetadata`] for new documents.
pub const CONFIG_VERSION: &str = "1.0";

/// Document metadata, maintained by the store rather than edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Version of the document schema this config was written with.
    pub version: String,

    /// When the document was first created.
    pub created: DateTime<Utc>,

    /// When the document was last modified, loaded, or saved.
    pub modified: DateTime<Utc>,
}

impl ConfigMetadata {
    /// Fresh metadata stamped with the current time.
    pub fn now() -> Self {
        let timestamp = Utc::now();
        Self {
            version: CONFIG_VERSION.to_string(),
            created: timestamp,
            modified: timestamp,
        }
    }
}

impl Default for ConfigMetadata {
    fn default() -> Self {
        Self::now()
    }
}

/// Root aggregate owning every bar and style in the edited document.
///
/// Exactly one instance is live inside the editor store at a time; loading a
/// file or resetting replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaybarConfig {
    /// Configured bars, ordered by their `order` field.
    #[serde(default)]
    pub bars: Vec<BarDefinition>,

    /// Structured stylesheet rules, independent of any bar.
    #[serde(default)]
    pub styles: Vec<StyleDefinition>,

    /// Document metadata.
    #[serde(default)]
    pub metadata: ConfigMetadata,
}

impl WaybarConfig {
    /// Looks up a bar by id.
    pub fn bar(&self, bar_id: &str) -> Option<&BarDefinition> {
        self.bars.iter().find(|bar| bar.id == bar_id)
    }

    /// Looks up a bar by id for mutation.
    pub fn bar_mut(&mut self, bar_id: &str) -> Option<&mut BarDefinition> {
        self.bars.iter_mut().find(|bar| bar.id == bar_id)
    }

    /// Looks up a style by id.
    pub fn style(&self, style_id: &str) -> Option<&StyleDefinition> {
        self.styles.iter().find(|style| style.id == style_id)
    }

    /// Looks up a style by id for mutation.
    pub fn style_mut(&mut self, style_id: &str) -> Option<&mut StyleDefinition> {
        self.styles.iter_mut().find(|style| style.id == style_id)
    }

    /// Records that the document changed.
    pub fn touch(&mut self) {
        self.metadata.modified = Utc::now();
    }
}

#[cfg(test)]
mod tests;
