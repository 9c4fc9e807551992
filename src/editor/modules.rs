//! Module placement and configuration operations.

use serde_json::{Map, Value};

use crate::model::{BarDefinition, ModuleInstance, ModuleKind, ModulePosition};
use crate::validate::module_schema;

use super::bars::resolve_bar;
use super::store::EditorStore;
use super::EditorError;

impl EditorStore {
    /// Adds a module to a bar zone, seeded with its schema defaults, and
    /// returns its id. The module is appended at the end of the zone.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownBar`] if the bar does not resolve.
    pub fn add_module(
        &self,
        bar_id: &str,
        kind: ModuleKind,
        position: ModulePosition,
    ) -> Result<String, EditorError> {
        self.mutate("add_module", move |config| {
            let bar = resolve_bar(config, bar_id)?;

            let order = bar
                .modules
                .iter()
                .filter(|module| module.position == position)
                .count();

            let mut module = ModuleInstance::new(kind, position, order);
            module.config = module_schema(kind).default_config();

            let id = module.id.clone();
            bar.modules.push(module);
            Ok(id)
        })
    }

    /// Replaces a module's configuration payload.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownBar`] or [`EditorError::UnknownModule`]
    /// if the addressing fails.
    pub fn update_module_config(
        &self,
        bar_id: &str,
        module_id: &str,
        new_config: Map<String, Value>,
    ) -> Result<(), EditorError> {
        self.mutate("update_module_config", move |config| {
            let module = resolve_module(resolve_bar(config, bar_id)?, module_id)?;
            module.config = new_config;
            Ok(())
        })
    }

    /// Enables or disables a module.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownBar`] or [`EditorError::UnknownModule`]
    /// if the addressing fails.
    pub fn set_module_enabled(
        &self,
        bar_id: &str,
        module_id: &str,
        enabled: bool,
    ) -> Result<(), EditorError> {
        self.mutate("set_module_enabled", move |config| {
            let module = resolve_module(resolve_bar(config, bar_id)?, module_id)?;
            module.enabled = enabled;
            Ok(())
        })
    }

    /// Sets or clears a module's custom name.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownBar`] or [`EditorError::UnknownModule`]
    /// if the addressing fails.
    pub fn set_module_custom_name(
        &self,
        bar_id: &str,
        module_id: &str,
        custom_name: Option<String>,
    ) -> Result<(), EditorError> {
        self.mutate("set_module_custom_name", move |config| {
            let module = resolve_module(resolve_bar(config, bar_id)?, module_id)?;
            module.custom_name = custom_name;
            Ok(())
        })
    }

    /// Deletes a module from its bar.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownBar`] or [`EditorError::UnknownModule`]
    /// if the addressing fails.
    pub fn delete_module(&self, bar_id: &str, module_id: &str) -> Result<(), EditorError> {
        self.mutate("delete_module", move |config| {
            let bar = resolve_bar(config, bar_id)?;
            let index = bar
                .modules
                .iter()
                .position(|module| module.id == module_id)
                .ok_or_else(|| EditorError::UnknownModule {
                    id: module_id.to_string(),
                })?;

            let removed = bar.modules.remove(index);
            renumber_zone(bar, removed.position);
            Ok(())
        })
    }

    /// Moves a module to another zone and index, renumbering both zones.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownBar`] or [`EditorError::UnknownModule`]
    /// if the addressing fails.
    pub fn move_module(
        &self,
        bar_id: &str,
        module_id: &str,
        new_position: ModulePosition,
        new_index: usize,
    ) -> Result<(), EditorError> {
        self.mutate("move_module", move |config| {
            let bar = resolve_bar(config, bar_id)?;
            let old_position = {
                let module = resolve_module(bar, module_id)?;
                let old_position = module.position;
                module.position = new_position;
                // Place past the end; renumbering assigns the real slot.
                module.order = usize::MAX;
                old_position
            };

            if old_position != new_position {
                renumber_zone(bar, old_position);
            }

            // Squeeze the moved module into its target index by shifting
            // everything at or after that index one slot down.
            let mut zone: Vec<usize> = ordered_zone_indices(bar, new_position);
            let moved_at = zone
                .iter()
                .position(|&index| bar.modules[index].id == module_id)
                .unwrap_or(zone.len().saturating_sub(1));
            let slot = new_index.min(zone.len().saturating_sub(1));
            let moved = zone.remove(moved_at);
            zone.insert(slot, moved);

            for (order, index) in zone.into_iter().enumerate() {
                bar.modules[index].order = order;
            }
            Ok(())
        })
    }

    /// Rewrites one zone's sequence to match `module_ids` exactly.
    ///
    /// After this call, reading the zone's modules sorted by `order` yields
    /// the ids in the given sequence.
    ///
    /// # Errors
    /// Returns [`EditorError::ReorderMismatch`] unless `module_ids` is a
    /// permutation of the zone's current modules.
    pub fn reorder_modules(
        &self,
        bar_id: &str,
        position: ModulePosition,
        module_ids: &[String],
    ) -> Result<(), EditorError> {
        self.mutate("reorder_modules", move |config| {
            let bar = resolve_bar(config, bar_id)?;

            let zone: Vec<&str> = bar
                .modules
                .iter()
                .filter(|module| module.position == position)
                .map(|module| module.id.as_str())
                .collect();

            let mismatch = zone.len() != module_ids.len()
                || module_ids
                    .iter()
                    .any(|id| !zone.contains(&id.as_str()))
                || zone
                    .iter()
                    .any(|id| !module_ids.iter().any(|given| given == id));
            if mismatch {
                return Err(EditorError::ReorderMismatch {
                    bar_id: bar_id.to_string(),
                    position,
                });
            }

            for module in &mut bar.modules {
                if module.position == position {
                    if let Some(order) = module_ids.iter().position(|id| *id == module.id) {
                        module.order = order;
                    }
                }
            }
            Ok(())
        })
    }
}

fn resolve_module<'a>(
    bar: &'a mut BarDefinition,
    module_id: &str,
) -> Result<&'a mut ModuleInstance, EditorError> {
    bar.module_mut(module_id)
        .ok_or_else(|| EditorError::UnknownModule {
            id: module_id.to_string(),
        })
}

/// Indices of a zone's modules in ascending `order`.
fn ordered_zone_indices(bar: &BarDefinition, position: ModulePosition) -> Vec<usize> {
    let mut indices: Vec<usize> = bar
        .modules
        .iter()
        .enumerate()
        .filter(|(_, module)| module.position == position)
        .map(|(index, _)| index)
        .collect();
    indices.sort_by_key(|&index| bar.modules[index].order);
    indices
}

fn renumber_zone(bar: &mut BarDefinition, position: ModulePosition) {
    for (order, index) in ordered_zone_indices(bar, position).into_iter().enumerate() {
        bar.modules[index].order = order;
    }
}
