//! Unit tests for the domain model types.

#![allow(clippy::unwrap_used)]

use serde_json::json;

use crate::model::{BarConfig, BarDefinition, Edge, Layer, ModuleKind, OutputSelector};

#[test]
fn every_kind_round_trips_through_its_tag() {
    for kind in ModuleKind::ALL {
        assert_eq!(ModuleKind::from_tag(kind.tag()), Some(*kind));
    }
}

#[test]
fn kind_tags_are_unique() {
    for (i, a) in ModuleKind::ALL.iter().enumerate() {
        for b in &ModuleKind::ALL[i + 1..] {
            assert_ne!(a.tag(), b.tag());
        }
    }
}

#[test]
fn unknown_tag_is_rejected() {
    assert_eq!(ModuleKind::from_tag("teleporter"), None);
    assert!(serde_json::from_value::<ModuleKind>(json!("teleporter")).is_err());
}

#[test]
fn kind_serializes_as_tag_string() {
    let value = serde_json::to_value(ModuleKind::HyprlandWorkspaces).unwrap();
    assert_eq!(value, json!("hyprland/workspaces"));

    let parsed: ModuleKind = serde_json::from_value(json!("keyboard-state")).unwrap();
    assert_eq!(parsed, ModuleKind::KeyboardState);
}

#[test]
fn bar_config_uses_native_key_spelling() {
    let config = BarConfig {
        layer: Some(Layer::Top),
        position: Some(Edge::Bottom),
        height: Some(30),
        margin_top: Some(4),
        gtk_layer_shell: Some(true),
        reload_style_on_change: Some(true),
        ..BarConfig::default()
    };

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value,
        json!({
            "layer": "top",
            "position": "bottom",
            "height": 30,
            "margin-top": 4,
            "gtk-layer-shell": true,
            "reload_style_on_change": true,
        })
    );
}

#[test]
fn output_selector_accepts_string_and_list() {
    let one: OutputSelector = serde_json::from_value(json!("DP-1")).unwrap();
    assert_eq!(one, OutputSelector::One("DP-1".to_string()));

    let many: OutputSelector = serde_json::from_value(json!(["DP-1", "!HDMI-A-1"])).unwrap();
    assert_eq!(
        many,
        OutputSelector::Many(vec!["DP-1".to_string(), "!HDMI-A-1".to_string()])
    );
}

#[test]
fn new_bar_starts_enabled_and_empty() {
    let bar = BarDefinition::new(Some("primary".to_string()), 0);

    assert!(bar.enabled);
    assert!(bar.modules.is_empty());
    assert_eq!(bar.order, 0);
    assert_eq!(bar.name.as_deref(), Some("primary"));
}
