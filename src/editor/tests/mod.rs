//! Unit tests for the coordinating store. Mutations are synchronous and the
//! gateway is never touched, so these run without a runtime; pipeline tests
//! against a scripted gateway live in the integration suite.

#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::editor::{EditorError, EditorStore};
use crate::gateway::{Compositor, Gateway, GatewayError, WaybarPaths};
use crate::model::{ModuleKind, ModulePosition};

/// Gateway that refuses every call; store mutations must never reach it.
struct UnreachableGateway;

#[async_trait]
impl Gateway for UnreachableGateway {
    async fn detect_paths(&self) -> Result<WaybarPaths, GatewayError> {
        Err(self.refused())
    }
    async fn load_config(&self, _path: &Path) -> Result<String, GatewayError> {
        Err(self.refused())
    }
    async fn save_config(&self, _path: &Path, _content: &str) -> Result<(), GatewayError> {
        Err(self.refused())
    }
    async fn load_style(&self, _path: &Path) -> Result<String, GatewayError> {
        Err(self.refused())
    }
    async fn save_style(&self, _path: &Path, _content: &str) -> Result<(), GatewayError> {
        Err(self.refused())
    }
    async fn list_backups(&self, _dir: &Path) -> Result<Vec<String>, GatewayError> {
        Err(self.refused())
    }
    async fn restore_backup(&self, _backup: &Path, _target: &Path) -> Result<(), GatewayError> {
        Err(self.refused())
    }
    async fn reload_renderer(&self) -> Result<(), GatewayError> {
        Err(self.refused())
    }
    async fn start_renderer(&self) -> Result<(), GatewayError> {
        Err(self.refused())
    }
    async fn stop_renderer(&self) -> Result<(), GatewayError> {
        Err(self.refused())
    }
    async fn restart_renderer(&self) -> Result<(), GatewayError> {
        Err(self.refused())
    }
    async fn renderer_running(&self) -> Result<bool, GatewayError> {
        Err(self.refused())
    }
    async fn detect_compositor(&self) -> Result<Compositor, GatewayError> {
        Err(self.refused())
    }
}

impl UnreachableGateway {
    fn refused(&self) -> GatewayError {
        GatewayError::Process {
            details: "gateway must not be called from unit tests".to_string(),
        }
    }
}

fn store() -> EditorStore {
    EditorStore::new(Arc::new(UnreachableGateway))
}

mod bars {
    use super::*;

    #[test]
    fn added_bars_receive_sequential_orders() {
        let store = store();
        store.add_bar(Some("first".to_string())).unwrap();
        store.add_bar(Some("second".to_string())).unwrap();

        let config = store.current();
        assert_eq!(config.bars.len(), 2);
        assert_eq!(config.bars[0].order, 0);
        assert_eq!(config.bars[1].order, 1);
    }

    #[test]
    fn delete_cascades_to_owned_modules_and_renumbers() {
        let store = store();
        let first = store.add_bar(Some("first".to_string())).unwrap();
        let second = store.add_bar(Some("second".to_string())).unwrap();
        store
            .add_module(&first, ModuleKind::Clock, ModulePosition::Center)
            .unwrap();

        store.delete_bar(&first).unwrap();

        let config = store.current();
        assert_eq!(config.bars.len(), 1);
        assert_eq!(config.bars[0].id, second);
        assert_eq!(config.bars[0].order, 0);
        // The deleted bar's module went with it.
        assert!(config.bars[0].modules.is_empty());
    }

    #[test]
    fn duplicate_deep_clones_with_fresh_ids() {
        let store = store();
        let original = store.add_bar(Some("main".to_string())).unwrap();
        let module_a = store
            .add_module(&original, ModuleKind::Cpu, ModulePosition::Left)
            .unwrap();
        let module_b = store
            .add_module(&original, ModuleKind::Memory, ModulePosition::Left)
            .unwrap();

        let copy = store.duplicate_bar(&original).unwrap();

        let config = store.current();
        let duplicated = config.bar(&copy).unwrap();

        assert_ne!(copy, original);
        assert_eq!(duplicated.name.as_deref(), Some("main (copy)"));
        assert_eq!(duplicated.order, 1);
        assert_eq!(duplicated.modules.len(), 2);
        // Fresh module ids, same kinds, preserved relative order.
        assert!(duplicated.modules.iter().all(|m| m.id != module_a && m.id != module_b));
        assert_eq!(duplicated.modules[0].kind, ModuleKind::Cpu);
        assert_eq!(duplicated.modules[1].kind, ModuleKind::Memory);
        assert!(duplicated.modules[0].order < duplicated.modules[1].order);
    }

    #[test]
    fn move_bar_renumbers_the_sequence() {
        let store = store();
        let a = store.add_bar(Some("a".to_string())).unwrap();
        let _b = store.add_bar(Some("b".to_string())).unwrap();
        let _c = store.add_bar(Some("c".to_string())).unwrap();

        store.move_bar(&a, 2).unwrap();

        let config = store.current();
        let names: Vec<Option<&str>> =
            config.bars.iter().map(|bar| bar.name.as_deref()).collect();
        assert_eq!(names, vec![Some("b"), Some("c"), Some("a")]);
        let orders: Vec<usize> = config.bars.iter().map(|bar| bar.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn unknown_bar_is_an_error_and_leaves_state_untouched() {
        let store = store();
        store.add_bar(None).unwrap();
        let before = store.current();

        let result = store.delete_bar("bar-missing");

        assert!(matches!(result, Err(EditorError::UnknownBar { .. })));
        assert_eq!(store.current(), before);
        // The failed operation must not consume an undo step.
        assert_eq!(store.history_depths().0, 1);
    }
}

mod modules {
    use super::*;

    #[test]
    fn added_modules_are_seeded_with_schema_defaults() {
        let store = store();
        let bar = store.add_bar(None).unwrap();
        let module = store
            .add_module(&bar, ModuleKind::Battery, ModulePosition::Right)
            .unwrap();

        let config = store.current();
        let battery = config.bar(&bar).unwrap().module(&module).unwrap();

        assert_eq!(battery.config.get("interval"), Some(&json!(60)));
        assert_eq!(battery.config.get("full-at"), Some(&json!(99)));
        assert!(battery.enabled);
        assert_eq!(battery.order, 0);
    }

    #[test]
    fn orders_are_tracked_per_zone() {
        let store = store();
        let bar = store.add_bar(None).unwrap();
        store
            .add_module(&bar, ModuleKind::Cpu, ModulePosition::Left)
            .unwrap();
        store
            .add_module(&bar, ModuleKind::Memory, ModulePosition::Left)
            .unwrap();
        store
            .add_module(&bar, ModuleKind::Clock, ModulePosition::Center)
            .unwrap();

        let config = store.current();
        let orders: Vec<(ModulePosition, usize)> = config.bars[0]
            .modules
            .iter()
            .map(|module| (module.position, module.order))
            .collect();

        assert_eq!(
            orders,
            vec![
                (ModulePosition::Left, 0),
                (ModulePosition::Left, 1),
                (ModulePosition::Center, 0),
            ]
        );
    }

    #[test]
    fn reorder_modules_rewrites_the_zone_sequence() {
        let store = store();
        let bar = store.add_bar(None).unwrap();
        let a = store
            .add_module(&bar, ModuleKind::Cpu, ModulePosition::Left)
            .unwrap();
        let b = store
            .add_module(&bar, ModuleKind::Memory, ModulePosition::Left)
            .unwrap();
        let c = store
            .add_module(&bar, ModuleKind::Disk, ModulePosition::Left)
            .unwrap();

        store
            .reorder_modules(&bar, ModulePosition::Left, &[b.clone(), a.clone(), c.clone()])
            .unwrap();

        let config = store.current();
        let mut zone: Vec<&crate::model::ModuleInstance> = config.bars[0]
            .modules
            .iter()
            .filter(|module| module.position == ModulePosition::Left)
            .collect();
        zone.sort_by_key(|module| module.order);
        let ids: Vec<&str> = zone.iter().map(|module| module.id.as_str()).collect();

        assert_eq!(ids, vec![b.as_str(), a.as_str(), c.as_str()]);
    }

    #[test]
    fn reorder_with_wrong_id_set_is_rejected() {
        let store = store();
        let bar = store.add_bar(None).unwrap();
        let a = store
            .add_module(&bar, ModuleKind::Cpu, ModulePosition::Left)
            .unwrap();
        store
            .add_module(&bar, ModuleKind::Memory, ModulePosition::Left)
            .unwrap();

        let result = store.reorder_modules(&bar, ModulePosition::Left, &[a]);

        assert!(matches!(result, Err(EditorError::ReorderMismatch { .. })));
    }

    #[test]
    fn move_module_across_zones_renumbers_both() {
        let store = store();
        let bar = store.add_bar(None).unwrap();
        let a = store
            .add_module(&bar, ModuleKind::Cpu, ModulePosition::Left)
            .unwrap();
        let b = store
            .add_module(&bar, ModuleKind::Memory, ModulePosition::Left)
            .unwrap();
        let c = store
            .add_module(&bar, ModuleKind::Clock, ModulePosition::Center)
            .unwrap();

        store
            .move_module(&bar, &a, ModulePosition::Center, 0)
            .unwrap();

        let config = store.current();
        let bar_def = &config.bars[0];

        let left = bar_def.module(&b).unwrap();
        assert_eq!((left.position, left.order), (ModulePosition::Left, 0));

        let moved = bar_def.module(&a).unwrap();
        assert_eq!((moved.position, moved.order), (ModulePosition::Center, 0));
        let clock = bar_def.module(&c).unwrap();
        assert_eq!((clock.position, clock.order), (ModulePosition::Center, 1));
    }

    #[test]
    fn delete_module_renumbers_its_zone() {
        let store = store();
        let bar = store.add_bar(None).unwrap();
        let a = store
            .add_module(&bar, ModuleKind::Cpu, ModulePosition::Left)
            .unwrap();
        let b = store
            .add_module(&bar, ModuleKind::Memory, ModulePosition::Left)
            .unwrap();

        store.delete_module(&bar, &a).unwrap();

        let config = store.current();
        let survivor = config.bars[0].module(&b).unwrap();
        assert_eq!(survivor.order, 0);
    }

    #[test]
    fn custom_name_and_enabled_flags_update() {
        let store = store();
        let bar = store.add_bar(None).unwrap();
        let module = store
            .add_module(&bar, ModuleKind::Battery, ModulePosition::Right)
            .unwrap();

        store
            .set_module_custom_name(&bar, &module, Some("bat0".to_string()))
            .unwrap();
        store.set_module_enabled(&bar, &module, false).unwrap();

        let config = store.current();
        let battery = config.bars[0].module(&module).unwrap();
        assert_eq!(battery.custom_name.as_deref(), Some("bat0"));
        assert!(!battery.enabled);
    }
}

mod history {
    use super::*;

    #[test]
    fn sixty_mutations_leave_fifty_undo_steps() {
        let store = store();
        for index in 0..60 {
            store.add_bar(Some(format!("bar-{index}"))).unwrap();
        }

        assert_eq!(store.history_depths(), (50, 0));

        let mut undone = 0;
        while store.undo().unwrap() {
            undone += 1;
        }

        assert_eq!(undone, 50);
        assert!(!store.can_undo());
        // Undo beyond the cap is a no-op.
        assert!(!store.undo().unwrap());
        assert_eq!(store.current().bars.len(), 10);
    }

    #[test]
    fn undo_then_redo_round_trips_the_document() {
        let store = store();
        let bar = store.add_bar(Some("main".to_string())).unwrap();
        store
            .add_module(&bar, ModuleKind::Clock, ModulePosition::Center)
            .unwrap();

        assert!(store.undo().unwrap());
        assert!(store.current().bars[0].modules.is_empty());

        assert!(store.redo().unwrap());
        assert_eq!(store.current().bars[0].modules.len(), 1);
    }

    #[test]
    fn new_mutation_clears_redo() {
        let store = store();
        store.add_bar(Some("a".to_string())).unwrap();
        store.undo().unwrap();
        assert!(store.can_redo());

        store.add_bar(Some("b".to_string())).unwrap();

        assert!(!store.can_redo());
        assert!(!store.redo().unwrap());
    }

    #[test]
    fn paused_history_captures_nothing_until_resumed() {
        let store = store();
        store.add_bar(Some("kept".to_string())).unwrap();
        let depth_before = store.history_depths().0;

        store.pause_history();
        store.add_bar(Some("bulk-1".to_string())).unwrap();
        store.add_bar(Some("bulk-2".to_string())).unwrap();
        store.resume_history();

        // Mutations applied while paused are live but uncaptured.
        assert_eq!(store.current().bars.len(), 3);
        assert_eq!(store.history_depths().0, depth_before);

        // The next mutation is captured normally.
        store.add_bar(Some("after".to_string())).unwrap();
        assert_eq!(store.history_depths().0, depth_before + 1);
    }

    #[test]
    fn import_is_a_single_undo_step() {
        let store = store();
        store.add_bar(Some("existing".to_string())).unwrap();

        let multi = serde_json::json!([
            {"name": "imported-a", "modules-left": ["cpu"], "cpu": {}},
            {"name": "imported-b"},
        ]);
        store.import_native(&multi.to_string()).unwrap();

        assert_eq!(store.current().bars.len(), 3);

        store.undo().unwrap();
        let names: Vec<Option<String>> = store
            .current()
            .bars
            .iter()
            .map(|bar| bar.name.clone())
            .collect();
        assert_eq!(names, vec![Some("existing".to_string())]);
    }
}

mod importing {
    use super::*;

    #[test]
    fn import_replaces_by_name_and_appends_others() {
        let store = store();
        let original = store.add_bar(Some("main".to_string())).unwrap();
        store
            .add_module(&original, ModuleKind::Clock, ModulePosition::Center)
            .unwrap();

        let incoming = serde_json::json!({
            "name": "main",
            "height": 42,
            "modules-left": ["cpu"],
            "cpu": {},
        });
        let outcome = store.import_native(&incoming.to_string()).unwrap();

        assert_eq!(outcome.bar_ids.len(), 1);
        let config = store.current();
        assert_eq!(config.bars.len(), 1);
        assert_eq!(config.bars[0].config.height, Some(42));
        assert_eq!(config.bars[0].order, 0);
    }

    #[test]
    fn import_surfaces_transform_warnings() {
        let store = store();
        let outcome = store
            .import_native(r#"{"modules-left": ["cpu"], "cpu": {}, "stray": {}}"#)
            .unwrap();

        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn unparsable_import_is_rejected() {
        let store = store();
        assert!(matches!(
            store.import_native("{ nope"),
            Err(EditorError::Transform(_))
        ));
    }
}

mod exporting {
    use super::*;

    #[test]
    fn export_round_trips_through_import() {
        let store = store();
        let bar = store.add_bar(Some("main".to_string())).unwrap();
        store
            .add_module(&bar, ModuleKind::Battery, ModulePosition::Right)
            .unwrap();

        let exported = store.export_native().unwrap();

        let other = super::store();
        other.import_native(&exported).unwrap();

        assert_eq!(other.current().bars.len(), 1);
        assert_eq!(other.current().bars[0].modules.len(), 1);
        assert_eq!(
            other.current().bars[0].modules[0].kind,
            ModuleKind::Battery
        );
    }

    #[test]
    fn stylesheet_export_skips_disabled_styles() {
        let store = store();
        let style = store.add_style("clock", "#clock").unwrap();
        store
            .set_style_properties(
                &style,
                vec![crate::model::CssProperty::new("color", "white")],
            )
            .unwrap();
        assert!(store.export_stylesheet().contains("#clock"));

        store.set_style_enabled(&style, false).unwrap();
        assert_eq!(store.export_stylesheet(), "");
    }
}

mod styles {
    use super::*;

    #[test]
    fn style_lifecycle_add_update_reorder_delete() {
        let store = store();
        let first = store.add_style("window", "window#waybar").unwrap();
        let second = store.add_style("clock", "#clock").unwrap();

        store.update_style(&second, "clock", "#clock.active").unwrap();
        store
            .reorder_styles(&[second.clone(), first.clone()])
            .unwrap();

        let config = store.current();
        assert_eq!(config.styles[0].selector, "#clock.active");
        assert_eq!(config.styles[1].selector, "window#waybar");

        store.delete_style(&first).unwrap();
        assert_eq!(store.current().styles.len(), 1);
    }

    #[test]
    fn style_reorder_requires_a_permutation() {
        let store = store();
        let only = store.add_style("a", "#a").unwrap();
        store.add_style("b", "#b").unwrap();

        assert!(matches!(
            store.reorder_styles(&[only]),
            Err(EditorError::StyleReorderMismatch)
        ));
    }
}

mod sessions {
    use super::*;

    #[test]
    fn session_round_trips_through_the_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("state").join("session.json");

        let store = store();
        let bar = store.add_bar(Some("persisted".to_string())).unwrap();
        store
            .add_module(&bar, ModuleKind::Clock, ModulePosition::Center)
            .unwrap();
        store.persist_session(&path).unwrap();

        let restored = super::store();
        assert!(restored.restore_session(&path).unwrap());
        assert_eq!(restored.current().bars.len(), 1);
        assert_eq!(restored.current().bars[0].name.as_deref(), Some("persisted"));
        // Restoring a replaced document leaves no undo history.
        assert!(!restored.can_undo());
    }

    #[test]
    fn missing_session_file_restores_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = store();
        assert!(!store.restore_session(&dir.path().join("absent.json")).unwrap());
    }
}
