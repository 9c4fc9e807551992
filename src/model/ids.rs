use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

pub(super) const BAR_PREFIX: &str = "bar";
pub(super) const MODULE_PREFIX: &str = "mod";
pub(super) const STYLE_PREFIX: &str = "style";

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generates an opaque entity id with the given prefix.
///
/// Ids combine a millisecond timestamp with a process-wide counter, so they
/// are unique within a session and sortable by creation time. They never
/// appear in the native Waybar format.
pub fn generate_id(prefix: &str) -> String {
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!(
        "{prefix}-{:x}-{sequence:04x}",
        Utc::now().timestamp_millis()
    )
}
