use std::collections::HashSet;

use crate::model::BarDefinition;
use crate::transform::{KNOWN_BAR_KEYS, module_native_id};

/// A module whose native id clashes with something else in the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConflict {
    /// Index of the offending module in the bar's module list.
    pub index: usize,
    /// The clashing native id.
    pub native_id: String,
}

/// Finds modules whose native id duplicates an earlier module's.
///
/// The native format is one object keyed by native id, so a later duplicate
/// would silently replace the earlier module's configuration at write time.
/// Modules are scanned in list order; the first occurrence of each id is
/// accepted and every later occurrence is reported at its own index, so a
/// bar with N modules sharing one id yields N-1 conflicts.
pub fn detect_duplicate_ids(bar: &BarDefinition) -> Vec<ModuleConflict> {
    let mut seen = HashSet::new();
    let mut conflicts = Vec::new();

    for (index, module) in bar.modules.iter().enumerate() {
        let native_id = module_native_id(module);
        if !seen.insert(native_id.clone()) {
            conflicts.push(ModuleConflict { index, native_id });
        }
    }

    conflicts
}

/// Finds modules whose native id equals a bar-level configuration key.
///
/// Such an id would overwrite bar configuration during serialization, since
/// module configs and bar settings share the top-level key namespace. The
/// closed module vocabulary keeps this from happening today, but the check
/// turns any future overlap into a validation error instead of silent data
/// loss.
pub fn detect_bar_key_collisions(bar: &BarDefinition) -> Vec<ModuleConflict> {
    bar.modules
        .iter()
        .enumerate()
        .filter_map(|(index, module)| {
            let native_id = module_native_id(module);
            KNOWN_BAR_KEYS
                .contains(&native_id.as_str())
                .then_some(ModuleConflict { index, native_id })
        })
        .collect()
}
