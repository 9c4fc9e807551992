use crate::model::{ModuleInstance, ModuleKind};

/// A decoded native module id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeId {
    /// The module type.
    pub kind: ModuleKind,
    /// The custom name suffix, if the id carried one.
    pub custom_name: Option<String>,
}

/// Encodes a module type and optional custom name into a native id.
///
/// The native id is `type` alone, or `type#customName`. It doubles as both
/// an entry in the `modules-*` arrays and the key the module's configuration
/// lives under, so this function is the single source of truth for its shape.
pub fn encode_native_id(kind: ModuleKind, custom_name: Option<&str>) -> String {
    match custom_name {
        Some(name) => format!("{}#{name}", kind.tag()),
        None => kind.tag().to_string(),
    }
}

/// Decodes a native id by splitting at the first `#`.
///
/// Returns `None` when the type tag is outside the known vocabulary. A
/// custom name containing further `#` characters is preserved verbatim, so
/// encode and decode stay symmetric.
pub fn decode_native_id(id: &str) -> Option<NativeId> {
    let (tag, custom_name) = match id.split_once('#') {
        Some((tag, rest)) => (tag, Some(rest.to_string())),
        None => (id, None),
    };

    ModuleKind::from_tag(tag).map(|kind| NativeId { kind, custom_name })
}

/// The native id of a module instance.
pub fn module_native_id(module: &ModuleInstance) -> String {
    encode_native_id(module.kind, module.custom_name.as_deref())
}
