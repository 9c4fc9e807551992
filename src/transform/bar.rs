use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::model::{BarConfig, BarDefinition, ModuleInstance, ModulePosition, WaybarConfig};

use super::native_id::{decode_native_id, module_native_id};
use super::{TransformError, TransformWarning};

/// Top-level native keys that belong to the bar itself rather than to a
/// module. Everything else at the top level is treated as a module
/// configuration keyed by its native id.
pub const KNOWN_BAR_KEYS: &[&str] = &[
    "layer",
    "position",
    "output",
    "height",
    "width",
    "margin",
    "margin-top",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "spacing",
    "mode",
    "exclusive",
    "passthrough",
    "gtk-layer-shell",
    "ipc",
    "name",
    "reload_style_on_change",
    "modules-left",
    "modules-center",
    "modules-right",
];

/// Keys deserialized into [`BarConfig`]; `name` and the module id arrays are
/// handled separately.
const BAR_CONFIG_KEYS: &[&str] = &[
    "layer",
    "position",
    "output",
    "height",
    "width",
    "margin",
    "margin-top",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "spacing",
    "mode",
    "exclusive",
    "passthrough",
    "gtk-layer-shell",
    "ipc",
    "reload_style_on_change",
];

/// Serializes one bar into its native top-level object.
///
/// Bar-level settings merge into the object directly; enabled modules are
/// sorted by `order`, partitioned into the three zone arrays (omitted when
/// empty), and each included module's configuration is written under its
/// native id.
///
/// # Errors
/// Returns [`TransformError::Serialize`] if the bar config cannot be
/// converted to JSON.
pub fn bar_to_native(bar: &BarDefinition) -> Result<Map<String, Value>, TransformError> {
    let config_value =
        serde_json::to_value(&bar.config).map_err(|e| TransformError::Serialize {
            what: "bar config".to_string(),
            details: e.to_string(),
        })?;

    let mut native = match config_value {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    if let Some(name) = &bar.name {
        native.insert("name".to_string(), Value::String(name.clone()));
    }

    let mut included: Vec<&ModuleInstance> =
        bar.modules.iter().filter(|module| module.enabled).collect();
    included.sort_by_key(|module| module.order);

    for position in ModulePosition::ALL {
        let ids: Vec<Value> = included
            .iter()
            .filter(|module| module.position == *position)
            .map(|module| Value::String(module_native_id(module)))
            .collect();

        if !ids.is_empty() {
            native.insert(position.native_key().to_string(), Value::Array(ids));
        }
    }

    for module in included {
        native.insert(
            module_native_id(module),
            Value::Object(module.config.clone()),
        );
    }

    Ok(native)
}

/// Serializes the whole document into native form.
///
/// A single enabled bar produces its plain native object. Several enabled
/// bars are exported as one object keyed by each bar's name (or id when it
/// has no name), for renderers running multiple simultaneous bars.
///
/// # Errors
/// Returns [`TransformError::Serialize`] if any bar fails to serialize.
pub fn config_to_native(config: &WaybarConfig) -> Result<Value, TransformError> {
    let mut enabled: Vec<&BarDefinition> =
        config.bars.iter().filter(|bar| bar.enabled).collect();
    enabled.sort_by_key(|bar| bar.order);

    match enabled.as_slice() {
        [] => Ok(Value::Object(Map::new())),
        [only] => Ok(Value::Object(bar_to_native(only)?)),
        bars => {
            let mut out = Map::new();
            for bar in bars {
                let key = bar.name.clone().unwrap_or_else(|| bar.id.clone());
                out.insert(key, Value::Object(bar_to_native(bar)?));
            }
            Ok(Value::Object(out))
        }
    }
}

/// Parses native configuration JSON into bar definitions.
///
/// A top-level object yields one bar; a top-level array yields one bar per
/// element (Waybar's multi-bar file form). Unreferenced module configs and
/// undecodable ids are reported as warnings, never errors.
///
/// # Errors
/// Returns [`TransformError::Parse`] for a top-level shape that is neither
/// object nor array, and [`TransformError::BarField`] when a known bar key
/// holds a value of the wrong type.
pub fn native_to_bars(
    value: &Value,
    fallback_name: Option<&str>,
) -> Result<(Vec<BarDefinition>, Vec<TransformWarning>), TransformError> {
    let mut warnings = Vec::new();

    let bars = match value {
        Value::Object(source) => {
            vec![native_object_to_bar(source, fallback_name, &mut warnings)?]
        }
        Value::Array(items) => {
            let mut bars = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let Value::Object(source) = item else {
                    return Err(TransformError::Parse {
                        details: format!("bar {index} is not an object"),
                    });
                };
                let mut bar = native_object_to_bar(source, None, &mut warnings)?;
                bar.order = index;
                bars.push(bar);
            }
            bars
        }
        _ => {
            return Err(TransformError::Parse {
                details: "expected a configuration object or an array of bars".to_string(),
            });
        }
    };

    Ok((bars, warnings))
}

fn native_object_to_bar(
    source: &Map<String, Value>,
    fallback_name: Option<&str>,
    warnings: &mut Vec<TransformWarning>,
) -> Result<BarDefinition, TransformError> {
    let config = bar_config_from_native(source)?;

    let name = match source.get("name") {
        None => fallback_name.map(str::to_string),
        Some(Value::String(name)) => Some(name.clone()),
        Some(other) => {
            return Err(TransformError::BarField {
                key: "name".to_string(),
                details: format!("expected a string, got {other}"),
            });
        }
    };

    let mut referenced: HashSet<&str> = HashSet::new();
    let mut modules = Vec::new();

    for position in ModulePosition::ALL {
        let Some(list) = source.get(position.native_key()) else {
            continue;
        };
        let Some(entries) = list.as_array() else {
            return Err(TransformError::BarField {
                key: position.native_key().to_string(),
                details: "expected an array of module ids".to_string(),
            });
        };

        let mut order = 0;
        for entry in entries {
            let Some(id) = entry.as_str() else {
                warnings.push(TransformWarning::InvalidModuleListEntry {
                    key: position.native_key().to_string(),
                });
                continue;
            };
            referenced.insert(id);

            let Some(decoded) = decode_native_id(id) else {
                warnings.push(TransformWarning::UnknownModuleType { id: id.to_string() });
                continue;
            };

            let config = match source.get(id) {
                None => Map::new(),
                Some(Value::Object(map)) => map.clone(),
                Some(_) => {
                    warnings.push(TransformWarning::InvalidModuleConfig { id: id.to_string() });
                    Map::new()
                }
            };

            let mut module = ModuleInstance::new(decoded.kind, *position, order);
            module.custom_name = decoded.custom_name;
            module.config = config;
            modules.push(module);
            order += 1;
        }
    }

    for key in source.keys() {
        if !KNOWN_BAR_KEYS.contains(&key.as_str()) && !referenced.contains(key.as_str()) {
            warnings.push(TransformWarning::OrphanModuleConfig { key: key.clone() });
        }
    }

    let mut bar = BarDefinition::new(name, 0);
    bar.config = config;
    bar.modules = modules;
    Ok(bar)
}

fn bar_config_from_native(source: &Map<String, Value>) -> Result<BarConfig, TransformError> {
    let mut assembled = Map::new();
    for key in BAR_CONFIG_KEYS {
        if let Some(value) = source.get(*key) {
            assembled.insert((*key).to_string(), value.clone());
        }
    }

    match serde_json::from_value::<BarConfig>(Value::Object(assembled.clone())) {
        Ok(config) => Ok(config),
        Err(_) => {
            // Re-parse key by key so the error names the offending field.
            for (key, value) in &assembled {
                let mut single = Map::new();
                single.insert(key.clone(), value.clone());
                if let Err(e) = serde_json::from_value::<BarConfig>(Value::Object(single)) {
                    return Err(TransformError::BarField {
                        key: key.clone(),
                        details: e.to_string(),
                    });
                }
            }
            Err(TransformError::Parse {
                details: "bar-level configuration could not be decoded".to_string(),
            })
        }
    }
}
