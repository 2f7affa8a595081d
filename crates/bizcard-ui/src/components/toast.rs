//! Toast stack
//!
//! Renders the toasts held by a [`ToastQueue`](bizcard_core::ToastQueue).
//! Errors use `role="alert"` so screen readers interrupt; everything else is
//! a polite `status`.

use bizcard_core::{Toast, ToastId, ToastKind};
use dioxus::prelude::*;

/// ARIA role for a toast of the given kind.
pub fn toast_role(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Error => "alert",
        ToastKind::Success | ToastKind::Info => "status",
    }
}

/// Full class list for a toast element.
pub fn toast_class(toast: &Toast) -> String {
    if toast.is_shown() {
        format!("toast {} show", toast.kind.class())
    } else {
        format!("toast {}", toast.kind.class())
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    /// Close button pressed on a toast
    pub on_dismiss: EventHandler<ToastId>,
}

#[component]
pub fn ToastStack(props: ToastStackProps) -> Element {
    rsx! {
        div { class: "toast-container",
            for toast in props.toasts.iter() {
                ToastView {
                    key: "{toast.id.dom_id()}",
                    toast: toast.clone(),
                    on_dismiss: props.on_dismiss,
                }
            }
        }
    }
}

#[component]
pub fn ToastView(toast: Toast, on_dismiss: EventHandler<ToastId>) -> Element {
    let id = toast.id;
    let class = toast_class(&toast);

    rsx! {
        div {
            id: "{id.dom_id()}",
            class: "{class}",
            role: toast_role(toast.kind),
            "aria-live": if toast.kind == ToastKind::Error { "assertive" } else { "polite" },
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-close",
                r#type: "button",
                "aria-label": "Close notification",
                onclick: move |_| on_dismiss.call(id),
                "\u{00D7}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizcard_core::ToastQueue;

    #[test]
    fn roles_by_kind() {
        assert_eq!(toast_role(ToastKind::Error), "alert");
        assert_eq!(toast_role(ToastKind::Success), "status");
        assert_eq!(toast_role(ToastKind::Info), "status");
    }

    #[test]
    fn leaving_toast_drops_show_class() {
        let mut queue = ToastQueue::default();
        let id = queue.success("Copied");
        let shown = queue.get(id).cloned().unwrap();
        assert_eq!(toast_class(&shown), "toast toast-success show");

        queue.hide(id);
        let leaving = queue.get(id).cloned().unwrap();
        assert_eq!(toast_class(&leaving), "toast toast-success");
    }
}
