//! Analytics hook.
//!
//! Interactions are emitted as structured `tracing` events on the
//! `bizcard::analytics` target. A subscriber layer can forward them to an
//! analytics service; without one they simply show up in the log.

pub const CATEGORY: &str = "user_interaction";

pub fn track_event(action: &str, label: &str) {
    tracing::info!(
        target: "bizcard::analytics",
        action,
        label,
        category = CATEGORY,
        "interaction"
    );
}
