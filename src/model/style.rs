use serde::{Deserialize, Serialize};

use super::{generate_id, ids};

/// A single CSS declaration inside a style rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssProperty {
    /// Property name, e.g. `background-color`.
    pub property: String,

    /// Property value, without any `!important` suffix.
    pub value: String,

    /// Whether the declaration carries `!important`.
    #[serde(default)]
    pub important: bool,
}

impl CssProperty {
    /// Creates a declaration without `!important`.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }
}

/// A named stylesheet rule: one selector with its ordered declarations.
///
/// Styles are independent of bars; disabling one removes it from the
/// serialized stylesheet without deleting it from the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDefinition {
    /// Opaque unique identifier, internal to the editor.
    pub id: String,

    /// Display name shown in the editor.
    pub name: String,

    /// CSS selector string, e.g. `window#waybar`.
    pub selector: String,

    /// Declarations in emission order.
    pub properties: Vec<CssProperty>,

    /// Whether the rule is included in the serialized stylesheet.
    pub enabled: bool,
}

impl StyleDefinition {
    /// Creates an empty enabled rule with a fresh id.
    pub fn new(name: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            id: generate_id(ids::STYLE_PREFIX),
            name: name.into(),
            selector: selector.into(),
            properties: Vec::new(),
            enabled: true,
        }
    }
}
