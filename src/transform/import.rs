use crate::model::{BarDefinition, WaybarConfig};

/// Merges an imported bar into an existing document.
///
/// An existing bar is matched by display name first, then by id. On a match
/// the imported bar replaces it in place, inheriting the original `order`;
/// otherwise the bar is appended after the current sequence. Returns the id
/// of the bar now present in the document.
pub fn merge_imported_bar(config: &mut WaybarConfig, mut incoming: BarDefinition) -> String {
    let matched = config.bars.iter().position(|existing| {
        (incoming.name.is_some() && existing.name == incoming.name) || existing.id == incoming.id
    });

    match matched {
        Some(index) => {
            incoming.order = config.bars[index].order;
            let id = incoming.id.clone();
            config.bars[index] = incoming;
            id
        }
        None => {
            incoming.order = config.bars.len();
            let id = incoming.id.clone();
            config.bars.push(incoming);
            id
        }
    }
}
