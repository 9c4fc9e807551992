//! Style rule operations.

use crate::model::{CssProperty, StyleDefinition, WaybarConfig};

use super::store::EditorStore;
use super::EditorError;

impl EditorStore {
    /// Adds an empty style rule, returning its id.
    ///
    /// # Errors
    /// Returns [`EditorError::Lock`] if the state lock is unavailable.
    pub fn add_style(
        &self,
        name: impl Into<String>,
        selector: impl Into<String>,
    ) -> Result<String, EditorError> {
        let (name, selector) = (name.into(), selector.into());
        self.mutate("add_style", move |config| {
            let style = StyleDefinition::new(name, selector);
            let id = style.id.clone();
            config.styles.push(style);
            Ok(id)
        })
    }

    /// Updates a style's name and selector.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownStyle`] if the id does not resolve.
    pub fn update_style(
        &self,
        style_id: &str,
        name: impl Into<String>,
        selector: impl Into<String>,
    ) -> Result<(), EditorError> {
        let (name, selector) = (name.into(), selector.into());
        self.mutate("update_style", move |config| {
            let style = resolve_style(config, style_id)?;
            style.name = name;
            style.selector = selector;
            Ok(())
        })
    }

    /// Replaces a style's declarations.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownStyle`] if the id does not resolve.
    pub fn set_style_properties(
        &self,
        style_id: &str,
        properties: Vec<CssProperty>,
    ) -> Result<(), EditorError> {
        self.mutate("set_style_properties", move |config| {
            let style = resolve_style(config, style_id)?;
            style.properties = properties;
            Ok(())
        })
    }

    /// Enables or disables a style.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownStyle`] if the id does not resolve.
    pub fn set_style_enabled(&self, style_id: &str, enabled: bool) -> Result<(), EditorError> {
        self.mutate("set_style_enabled", move |config| {
            let style = resolve_style(config, style_id)?;
            style.enabled = enabled;
            Ok(())
        })
    }

    /// Deletes a style rule.
    ///
    /// # Errors
    /// Returns [`EditorError::UnknownStyle`] if the id does not resolve.
    pub fn delete_style(&self, style_id: &str) -> Result<(), EditorError> {
        self.mutate("delete_style", move |config| {
            let index = config
                .styles
                .iter()
                .position(|style| style.id == style_id)
                .ok_or_else(|| EditorError::UnknownStyle {
                    id: style_id.to_string(),
                })?;
            config.styles.remove(index);
            Ok(())
        })
    }

    /// Rewrites the stylesheet cascade order to match `style_ids` exactly.
    ///
    /// # Errors
    /// Returns [`EditorError::StyleReorderMismatch`] unless `style_ids` is a
    /// permutation of the current styles.
    pub fn reorder_styles(&self, style_ids: &[String]) -> Result<(), EditorError> {
        self.mutate("reorder_styles", move |config| {
            let current: Vec<&str> = config.styles.iter().map(|style| style.id.as_str()).collect();
            let mismatch = current.len() != style_ids.len()
                || style_ids.iter().any(|id| !current.contains(&id.as_str()))
                || current
                    .iter()
                    .any(|id| !style_ids.iter().any(|given| given == id));
            if mismatch {
                return Err(EditorError::StyleReorderMismatch);
            }

            config.styles.sort_by_key(|style| {
                style_ids
                    .iter()
                    .position(|id| *id == style.id)
                    .unwrap_or(usize::MAX)
            });
            Ok(())
        })
    }
}

fn resolve_style<'a>(
    config: &'a mut WaybarConfig,
    style_id: &str,
) -> Result<&'a mut StyleDefinition, EditorError> {
    config
        .style_mut(style_id)
        .ok_or_else(|| EditorError::UnknownStyle {
            id: style_id.to_string(),
        })
}
