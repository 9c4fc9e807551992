//! Bar-level mutation operations.

use crate::model::{BarConfig, BarDefinition, WaybarConfig, generate_id};

use super::store::EditorStore;
use super::EditorError;

impl EditorStore {
    /// Adds an empty bar at the end of the sequence, returning its id.
    ///
    /// # Errors
    /// Returns [`EditorError::Lock`] if the state lock is unavailable.
    pub fn add_bar(&self, name: Option<String>) -> Result<String, EditorError> {
        self.mutate("add_bar", move |config| {
            let bar = BarDefinition::new(name, config.bars.len());
            let id = bar.id.clone();
            config.bars.push(bar);
            Ok(id)
        })
    }

    /// Replaces a bar's configuration.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownBar`] if the id does not resolve.
    pub fn update_bar_config(
        &self,
        bar_id: &str,
        bar_config: BarConfig,
    ) -> Result<(), EditorError> {
        self.mutate("update_bar_config", move |config| {
            let bar = resolve_bar(config, bar_id)?;
            bar.config = bar_config;
            Ok(())
        })
    }

    /// Renames a bar (or clears its name).
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownBar`] if the id does not resolve.
    pub fn rename_bar(&self, bar_id: &str, name: Option<String>) -> Result<(), EditorError> {
        self.mutate("rename_bar", move |config| {
            let bar = resolve_bar(config, bar_id)?;
            bar.name = name;
            Ok(())
        })
    }

    /// Enables or disables a bar.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownBar`] if the id does not resolve.
    pub fn set_bar_enabled(&self, bar_id: &str, enabled: bool) -> Result<(), EditorError> {
        self.mutate("set_bar_enabled", move |config| {
            let bar = resolve_bar(config, bar_id)?;
            bar.enabled = enabled;
            Ok(())
        })
    }

    /// Deletes a bar together with every module it owns.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownBar`] if the id does not resolve.
    pub fn delete_bar(&self, bar_id: &str) -> Result<(), EditorError> {
        self.mutate("delete_bar", move |config| {
            let index = config
                .bars
                .iter()
                .position(|bar| bar.id == bar_id)
                .ok_or_else(|| EditorError::UnknownBar {
                    id: bar_id.to_string(),
                })?;

            config.bars.remove(index);
            renumber_bars(config);
            Ok(())
        })
    }

    /// Deep-clones a bar and all its modules under fresh ids, appending the
    /// copy at the end of the sequence. Relative module order is preserved.
    /// Returns the new bar's id.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownBar`] if the id does not resolve.
    pub fn duplicate_bar(&self, bar_id: &str) -> Result<String, EditorError> {
        self.mutate("duplicate_bar", move |config| {
            let source = config
                .bar(bar_id)
                .ok_or_else(|| EditorError::UnknownBar {
                    id: bar_id.to_string(),
                })?;

            let mut copy = source.clone();
            copy.id = generate_id("bar");
            copy.name = copy.name.map(|name| format!("{name} (copy)"));
            copy.order = config.bars.len();
            for module in &mut copy.modules {
                module.id = generate_id("mod");
            }

            let id = copy.id.clone();
            config.bars.push(copy);
            Ok(id)
        })
    }

    /// Moves a bar to a new index in the sequence.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownBar`] if the id does not resolve.
    pub fn move_bar(&self, bar_id: &str, target_index: usize) -> Result<(), EditorError> {
        self.mutate("move_bar", move |config| {
            let index = config
                .bars
                .iter()
                .position(|bar| bar.id == bar_id)
                .ok_or_else(|| EditorError::UnknownBar {
                    id: bar_id.to_string(),
                })?;

            let bar = config.bars.remove(index);
            let target = target_index.min(config.bars.len());
            config.bars.insert(target, bar);
            renumber_bars(config);
            Ok(())
        })
    }
}

pub(super) fn resolve_bar<'a>(
    config: &'a mut WaybarConfig,
    bar_id: &str,
) -> Result<&'a mut BarDefinition, EditorError> {
    config.bar_mut(bar_id).ok_or_else(|| EditorError::UnknownBar {
        id: bar_id.to_string(),
    })
}

fn renumber_bars(config: &mut WaybarConfig) {
    for (index, bar) in config.bars.iter_mut().enumerate() {
        bar.order = index;
    }
}
