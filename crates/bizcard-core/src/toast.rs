//! Toast notifications.
//!
//! A toast goes through two phases: `Visible` (rendered with the `show`
//! class) and `Leaving` (exit animation running). The queue itself holds no
//! timers; the UI schedules [`ToastQueue::hide`] after
//! [`ToastQueue::dismiss_after`] and [`ToastQueue::remove`] after
//! [`ToastQueue::exit_duration`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default time a toast stays on screen.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Default length of the exit animation.
pub const DEFAULT_EXIT_DURATION: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// DOM id for the toast element.
    pub fn dom_id(&self) -> String {
        format!("toast-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
    /// `None` for sticky toasts
    pub dismiss_after: Option<Duration>,
}

impl Toast {
    pub fn is_shown(&self) -> bool {
        self.phase == ToastPhase::Visible
    }
}

/// Ordered set of toasts currently on screen.
#[derive(Clone, Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    default_duration: Duration,
    exit_duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION, DEFAULT_EXIT_DURATION)
    }
}

impl ToastQueue {
    pub fn new(default_duration: Duration, exit_duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            default_duration,
            exit_duration,
        }
    }

    /// Show a toast. `duration` of `None` uses the default; a zero duration
    /// makes the toast sticky until closed.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Option<Duration>,
    ) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        let duration = duration.unwrap_or(self.default_duration);
        let toast = Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Visible,
            dismiss_after: (!duration.is_zero()).then_some(duration),
        };
        tracing::debug!(toast = id.0, kind = ?kind, "toast shown: {}", toast.message);
        self.toasts.push(toast);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.show(message, ToastKind::Success, None)
    }

    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.show(message, ToastKind::Error, None)
    }

    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.show(message, ToastKind::Info, None)
    }

    /// Start the exit phase. Returns `false` for unknown or already leaving
    /// toasts.
    pub fn hide(&mut self, id: ToastId) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase == ToastPhase::Visible => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Drop a toast after its exit animation.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn dismiss_after(&self, id: ToastId) -> Option<Duration> {
        self.get(id).and_then(|t| t.dismiss_after)
    }

    pub fn exit_duration(&self) -> Duration {
        self.exit_duration
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut queue = ToastQueue::default();
        let a = queue.info("one");
        let b = queue.info("two");
        assert!(a < b);
        assert_ne!(a.dom_id(), b.dom_id());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn default_duration_applies() {
        let mut queue = ToastQueue::default();
        let id = queue.success("Phone number copied to clipboard!");
        assert_eq!(queue.dismiss_after(id), Some(DEFAULT_TOAST_DURATION));
        assert_eq!(queue.get(id).map(|t| t.kind), Some(ToastKind::Success));
    }

    #[test]
    fn zero_duration_is_sticky() {
        let mut queue = ToastQueue::default();
        let id = queue.show("stay", ToastKind::Info, Some(Duration::ZERO));
        assert_eq!(queue.dismiss_after(id), None);
    }

    #[test]
    fn hide_then_remove() {
        let mut queue = ToastQueue::default();
        let id = queue.error("Failed to copy number. Please copy manually.");
        assert!(queue.get(id).unwrap().is_shown());

        assert!(queue.hide(id));
        assert!(!queue.hide(id));
        assert_eq!(queue.get(id).map(|t| t.phase), Some(ToastPhase::Leaving));

        assert!(queue.remove(id));
        assert!(!queue.remove(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn unknown_toast_is_ignored() {
        let mut queue = ToastQueue::default();
        let id = queue.info("x");
        queue.remove(id);
        assert!(!queue.hide(id));
    }

    #[test]
    fn kind_classes() {
        assert_eq!(ToastKind::Success.class(), "toast-success");
        assert_eq!(ToastKind::Error.class(), "toast-error");
        assert_eq!(ToastKind::Info.class(), "toast-info");
    }
}
