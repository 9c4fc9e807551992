//! Schema-driven validation of the domain model.
//!
//! Validation never mutates and never short-circuits: every entry point
//! walks its whole input and returns a [`ValidationReport`] holding all
//! findings keyed by dotted field path. The editor store runs the full-config
//! entry point before every save and after every mutation (debounced), so a
//! report with errors always blocks a write.

mod conflict;
mod report;
mod schema;

pub use conflict::{ModuleConflict, detect_bar_key_collisions, detect_duplicate_ids};
pub use report::ValidationReport;
pub use schema::{COMMON_FIELDS, DefaultValue, FieldSpec, FieldType, ModuleSchema, module_schema};

use serde_json::{Map, Value};

use crate::model::{BarConfig, BarDefinition, ModuleInstance, ModuleKind, StyleDefinition, WaybarConfig};

/// Validates bar-level configuration against structural and range rules.
pub fn validate_bar_config(config: &BarConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    if config.height == Some(0) {
        report.add("height", "height must be a positive integer");
    }
    if config.width == Some(0) {
        report.add("width", "width must be a positive integer");
    }
    if let Some(margin) = &config.margin {
        let tokens: Vec<&str> = margin.split_whitespace().collect();
        if tokens.is_empty() || tokens.len() > 4 {
            report.add("margin", "margin expects between one and four values");
        } else if tokens.iter().any(|token| token.parse::<i32>().is_err()) {
            report.add("margin", "margin values must be integers");
        }
    }

    report
}

/// Validates a module's shape, independent of its configuration payload.
pub fn validate_module_instance(module: &ModuleInstance) -> ValidationReport {
    let mut report = ValidationReport::new();

    if module.id.is_empty() {
        report.add("id", "module id must not be empty");
    }
    if let Some(custom_name) = &module.custom_name {
        if custom_name.is_empty() {
            report.add("custom_name", "custom name must not be empty when set");
        }
    }

    report
}

/// Validates a module's configuration against its kind's schema.
///
/// Every finding is reported under a `config.`-prefixed path. Keys the
/// schema does not know are accepted unchanged; the payload is an open map
/// and Waybar tolerates extras.
pub fn validate_module_config(kind: ModuleKind, config: &Map<String, Value>) -> ValidationReport {
    let schema = module_schema(kind);
    let mut report = ValidationReport::new();

    for (key, value) in config {
        if let Some(spec) = schema.field(key) {
            if let Err(message) = spec.ty.check(value) {
                report.add(format!("config.{key}"), message);
            }
        }
    }

    report
}

/// Validates one style rule.
pub fn validate_style(style: &StyleDefinition) -> ValidationReport {
    let mut report = ValidationReport::new();

    if style.id.is_empty() {
        report.add("id", "style id must not be empty");
    }
    if style.selector.trim().is_empty() {
        report.add("selector", "selector must not be empty");
    }
    for (index, property) in style.properties.iter().enumerate() {
        if property.property.trim().is_empty() {
            report.add(
                format!("properties.{index}.property"),
                "property name must not be empty",
            );
        }
        if property.value.trim().is_empty() {
            report.add(
                format!("properties.{index}.value"),
                "property value must not be empty",
            );
        }
    }

    report
}

/// Validates a whole bar: its configuration, every module, and conflicts.
pub fn validate_bar_definition(bar: &BarDefinition) -> ValidationReport {
    let mut report = ValidationReport::new();

    if bar.id.is_empty() {
        report.add("id", "bar id must not be empty");
    }

    report.merge_under("config", validate_bar_config(&bar.config));

    for (index, module) in bar.modules.iter().enumerate() {
        let prefix = format!("modules.{index}");
        report.merge_under(&prefix, validate_module_instance(module));
        report.merge_under(&prefix, validate_module_config(module.kind, &module.config));
    }

    for conflict in detect_duplicate_ids(bar) {
        report.add(
            format!("modules.{}", conflict.index),
            format!("duplicate module id '{}'", conflict.native_id),
        );
    }
    for collision in detect_bar_key_collisions(bar) {
        report.add(
            format!("modules.{}", collision.index),
            format!(
                "module id '{}' collides with a bar-level configuration key",
                collision.native_id
            ),
        );
    }

    report
}

/// Validates the full document.
///
/// Succeeds iff every bar, module, and style validates and no bar reports a
/// conflict. All findings are aggregated under document-rooted paths such as
/// `bars.0.modules.1.config.interval`.
pub fn validate_config(config: &WaybarConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    let mut seen_bar_ids = std::collections::HashSet::new();
    for (index, bar) in config.bars.iter().enumerate() {
        let prefix = format!("bars.{index}");
        if !seen_bar_ids.insert(bar.id.as_str()) {
            report.add(format!("{prefix}.id"), format!("duplicate bar id '{}'", bar.id));
        }
        report.merge_under(&prefix, validate_bar_definition(bar));
    }

    for (index, style) in config.styles.iter().enumerate() {
        report.merge_under(&format!("styles.{index}"), validate_style(style));
    }

    report
}

#[cfg(test)]
mod tests;
