//! Unit tests for the validation engine.

#![allow(clippy::unwrap_used)]

use serde_json::json;

use crate::model::{
    BarConfig, BarDefinition, ModuleInstance, ModuleKind, ModulePosition, StyleDefinition,
    WaybarConfig,
};
use crate::validate::{
    ValidationReport, detect_bar_key_collisions, detect_duplicate_ids, module_schema,
    validate_bar_config, validate_config, validate_module_config, validate_module_instance,
    validate_style,
};

fn module(kind: ModuleKind, custom: Option<&str>) -> ModuleInstance {
    let mut module = ModuleInstance::new(kind, ModulePosition::Left, 0);
    module.custom_name = custom.map(str::to_string);
    module
}

mod reports {
    use super::*;

    #[test]
    fn empty_report_is_success() {
        let report = ValidationReport::new();
        assert!(report.success());
        assert_eq!(report.message_count(), 0);
    }

    #[test]
    fn merge_under_prefixes_paths() {
        let mut inner = ValidationReport::new();
        inner.add("config.interval", "must be at least 1");

        let mut outer = ValidationReport::new();
        outer.merge_under("bars.0.modules.1", inner);

        assert_eq!(
            outer.messages_for("bars.0.modules.1.config.interval"),
            &["must be at least 1".to_string()]
        );
    }

    #[test]
    fn messages_preserve_report_order() {
        let mut report = ValidationReport::new();
        report.add("height", "first");
        report.add("height", "second");

        assert_eq!(
            report.messages_for("height"),
            &["first".to_string(), "second".to_string()]
        );
    }
}

mod bar_configs {
    use super::*;

    #[test]
    fn zero_height_and_width_are_rejected() {
        let config = BarConfig {
            height: Some(0),
            width: Some(0),
            ..BarConfig::default()
        };

        let report = validate_bar_config(&config);

        assert!(!report.success());
        assert!(!report.messages_for("height").is_empty());
        assert!(!report.messages_for("width").is_empty());
    }

    #[test]
    fn margin_shorthand_must_hold_integers() {
        let ok = BarConfig {
            margin: Some("5 10 5 10".to_string()),
            ..BarConfig::default()
        };
        assert!(validate_bar_config(&ok).success());

        let bad = BarConfig {
            margin: Some("5 wide".to_string()),
            ..BarConfig::default()
        };
        assert!(!validate_bar_config(&bad).success());

        let too_many = BarConfig {
            margin: Some("1 2 3 4 5".to_string()),
            ..BarConfig::default()
        };
        assert!(!validate_bar_config(&too_many).success());
    }
}

mod module_configs {
    use super::*;

    #[test]
    fn negative_battery_interval_fails_with_interval_path() {
        let mut config = serde_json::Map::new();
        config.insert("interval".to_string(), json!(-10));

        let report = validate_module_config(ModuleKind::Battery, &config);

        assert!(!report.success());
        let paths: Vec<&String> = report.errors().keys().collect();
        assert!(paths.iter().any(|path| path.contains("interval")));
        assert_eq!(report.messages_for("config.interval").len(), 1);
    }

    #[test]
    fn full_at_must_stay_within_percent_range() {
        let mut config = serde_json::Map::new();
        config.insert("full-at".to_string(), json!(150));

        let report = validate_module_config(ModuleKind::Battery, &config);
        assert!(!report.messages_for("config.full-at").is_empty());
    }

    #[test]
    fn keyword_fields_reject_unlisted_values() {
        let mut config = serde_json::Map::new();
        config.insert("sort-by".to_string(), json!("alphabet"));

        let report = validate_module_config(ModuleKind::HyprlandWorkspaces, &config);
        assert!(!report.messages_for("config.sort-by").is_empty());
    }

    #[test]
    fn custom_interval_accepts_once_keyword() {
        let mut config = serde_json::Map::new();
        config.insert("interval".to_string(), json!("once"));
        assert!(validate_module_config(ModuleKind::Custom, &config).success());

        config.insert("interval".to_string(), json!("twice"));
        assert!(!validate_module_config(ModuleKind::Custom, &config).success());

        config.insert("interval".to_string(), json!(0));
        assert!(!validate_module_config(ModuleKind::Custom, &config).success());
    }

    #[test]
    fn icons_accept_arrays_and_maps() {
        let mut config = serde_json::Map::new();
        config.insert("format-icons".to_string(), json!(["", "", ""]));
        assert!(validate_module_config(ModuleKind::Battery, &config).success());

        config.insert("format-icons".to_string(), json!({"charging": ""}));
        assert!(validate_module_config(ModuleKind::Battery, &config).success());

        config.insert("format-icons".to_string(), json!(7));
        assert!(!validate_module_config(ModuleKind::Battery, &config).success());
    }

    #[test]
    fn wrong_types_on_common_fields_are_reported() {
        let mut config = serde_json::Map::new();
        config.insert("tooltip".to_string(), json!("yes"));
        config.insert("max-length".to_string(), json!(-3));

        let report = validate_module_config(ModuleKind::Clock, &config);

        assert_eq!(report.message_count(), 2);
        assert!(!report.messages_for("config.tooltip").is_empty());
        assert!(!report.messages_for("config.max-length").is_empty());
    }

    #[test]
    fn unknown_keys_pass_through() {
        let mut config = serde_json::Map::new();
        config.insert("totally-custom-key".to_string(), json!({"nested": true}));

        assert!(validate_module_config(ModuleKind::Cpu, &config).success());
    }
}

mod schemas {
    use super::*;

    #[test]
    fn battery_defaults_seed_interval_and_full_at() {
        let defaults = module_schema(ModuleKind::Battery).default_config();

        assert_eq!(defaults.get("interval"), Some(&json!(60)));
        assert_eq!(defaults.get("full-at"), Some(&json!(99)));
    }

    #[test]
    fn clock_defaults_seed_interval_and_format() {
        let defaults = module_schema(ModuleKind::Clock).default_config();

        assert_eq!(defaults.get("interval"), Some(&json!(60)));
        assert_eq!(defaults.get("format"), Some(&json!("{:%H:%M}")));
    }

    #[test]
    fn every_kind_has_a_schema_with_common_fields() {
        for kind in ModuleKind::ALL {
            let schema = module_schema(*kind);
            assert!(schema.field("tooltip").is_some(), "missing for {kind}");
            assert!(schema.field("on-click").is_some(), "missing for {kind}");
        }
    }

    #[test]
    fn kind_specific_field_overrides_common_spec() {
        // wlr/taskbar narrows on-click to an action keyword.
        let schema = module_schema(ModuleKind::WlrTaskbar);
        let mut config = serde_json::Map::new();
        config.insert("on-click".to_string(), json!("activate"));
        assert!(validate_module_config(schema.kind, &config).success());

        config.insert("on-click".to_string(), json!("dance"));
        assert!(!validate_module_config(schema.kind, &config).success());
    }
}

mod instances {
    use super::*;

    #[test]
    fn well_formed_instance_passes() {
        assert!(validate_module_instance(&module(ModuleKind::Cpu, None)).success());
    }

    #[test]
    fn empty_custom_name_is_rejected() {
        let report = validate_module_instance(&module(ModuleKind::Cpu, Some("")));
        assert!(!report.messages_for("custom_name").is_empty());
    }

    #[test]
    fn empty_id_is_rejected() {
        let mut instance = module(ModuleKind::Cpu, None);
        instance.id = String::new();

        let report = validate_module_instance(&instance);
        assert!(!report.messages_for("id").is_empty());
    }
}

mod conflicts {
    use super::*;

    #[test]
    fn n_modules_sharing_an_id_yield_n_minus_one_conflicts() {
        let mut bar = BarDefinition::new(None, 0);
        bar.modules = vec![
            module(ModuleKind::Battery, Some("bat0")),
            module(ModuleKind::Battery, Some("bat0")),
            module(ModuleKind::Battery, Some("bat0")),
        ];

        let conflicts = detect_duplicate_ids(&bar);

        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].index, 1);
        assert_eq!(conflicts[1].index, 2);
        assert!(conflicts.iter().all(|c| c.native_id == "battery#bat0"));
    }

    #[test]
    fn distinct_custom_names_do_not_conflict() {
        let mut bar = BarDefinition::new(None, 0);
        bar.modules = vec![
            module(ModuleKind::Battery, Some("bat0")),
            module(ModuleKind::Battery, Some("bat1")),
            module(ModuleKind::Battery, None),
        ];

        assert!(detect_duplicate_ids(&bar).is_empty());
    }

    #[test]
    fn scan_follows_list_order_not_module_order() {
        let mut first = module(ModuleKind::Cpu, None);
        first.order = 5;
        let mut second = module(ModuleKind::Cpu, None);
        second.order = 0;

        let mut bar = BarDefinition::new(None, 0);
        bar.modules = vec![first, second];

        let conflicts = detect_duplicate_ids(&bar);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].index, 1);
    }

    #[test]
    fn no_module_kind_collides_with_bar_keys() {
        let mut bar = BarDefinition::new(None, 0);
        bar.modules = ModuleKind::ALL
            .iter()
            .map(|kind| module(*kind, None))
            .collect();

        assert!(detect_bar_key_collisions(&bar).is_empty());
    }
}

mod styles {
    use super::*;

    #[test]
    fn empty_selector_is_rejected() {
        let style = StyleDefinition::new("broken", "  ");
        let report = validate_style(&style);
        assert!(!report.messages_for("selector").is_empty());
    }

    #[test]
    fn empty_property_names_and_values_are_reported_by_index() {
        let mut style = StyleDefinition::new("clock", "#clock");
        style.properties = vec![
            crate::model::CssProperty::new("color", "white"),
            crate::model::CssProperty::new("", "red"),
            crate::model::CssProperty::new("background", ""),
        ];

        let report = validate_style(&style);

        assert!(!report.messages_for("properties.1.property").is_empty());
        assert!(!report.messages_for("properties.2.value").is_empty());
        assert!(report.messages_for("properties.0.property").is_empty());
    }
}

mod full_documents {
    use super::*;

    #[test]
    fn findings_aggregate_under_document_paths() {
        let mut bad_module = module(ModuleKind::Battery, None);
        bad_module
            .config
            .insert("interval".to_string(), json!(-10));

        let mut bar = BarDefinition::new(Some("main".to_string()), 0);
        bar.config.height = Some(0);
        bar.modules = vec![module(ModuleKind::Cpu, None), bad_module];

        let mut style = StyleDefinition::new("broken", "");

        let mut config = WaybarConfig::default();
        config.bars = vec![bar];
        style.enabled = true;
        config.styles = vec![style];

        let report = validate_config(&config);

        assert!(!report.success());
        assert!(!report.messages_for("bars.0.config.height").is_empty());
        assert!(
            !report
                .messages_for("bars.0.modules.1.config.interval")
                .is_empty()
        );
        assert!(!report.messages_for("styles.0.selector").is_empty());
    }

    #[test]
    fn duplicate_ids_surface_in_full_validation() {
        let mut bar = BarDefinition::new(None, 0);
        bar.modules = vec![
            module(ModuleKind::Clock, None),
            module(ModuleKind::Clock, None),
        ];

        let mut config = WaybarConfig::default();
        config.bars = vec![bar];

        let report = validate_config(&config);
        assert_eq!(report.messages_for("bars.0.modules.1").len(), 1);
    }

    #[test]
    fn duplicate_detection_is_scoped_per_bar() {
        let mut first = BarDefinition::new(Some("a".to_string()), 0);
        first.modules = vec![module(ModuleKind::Clock, None)];
        let mut second = BarDefinition::new(Some("b".to_string()), 1);
        second.modules = vec![module(ModuleKind::Clock, None)];

        let mut config = WaybarConfig::default();
        config.bars = vec![first, second];

        assert!(validate_config(&config).success());
    }

    #[test]
    fn valid_document_passes() {
        let mut bar = BarDefinition::new(Some("main".to_string()), 0);
        bar.config.height = Some(30);
        let mut clock = module(ModuleKind::Clock, None);
        clock.config = module_schema(ModuleKind::Clock).default_config();
        bar.modules = vec![clock];

        let mut config = WaybarConfig::default();
        config.bars = vec![bar];

        assert!(validate_config(&config).success());
    }
}
