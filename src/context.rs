//! Page context for the business card.
//!
//! The [`App`](crate::app::App) component provides one shared page model and
//! the state every widget on the card touches: the overlay coordinator, the
//! toast queue, the live region and the social menu.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut overlays = use_overlays();
//! overlays.write().open(call::CALL_OVERLAY);
//!
//! let toasts = use_toasts();
//! show_toast(toasts, "Copied", ToastKind::Success);
//! ```

use std::time::Duration;

use bizcard_core::live_region::ANNOUNCEMENT_TTL;
use bizcard_core::{
    Announcer, CardConfig, Disclosure, ElementId, ElementSpec, OverlayCoordinator, PageDocument,
    ToastId, ToastKind, ToastQueue,
};
use dioxus::prelude::*;

pub type Overlays = OverlayCoordinator<PageDocument>;

/// Social menu disclosure; `None` until the menu markup is mounted.
pub type SocialMenuState = Option<Disclosure<PageDocument>>;

/// Hook to access the page configuration.
pub fn use_card_config() -> CardConfig {
    use_context::<CardConfig>()
}

/// Hook to access the shared page model.
pub fn use_page_document() -> PageDocument {
    use_context::<PageDocument>()
}

/// Hook to access the overlay coordinator.
///
/// Writing to the signal re-renders every component that reads overlay
/// state, so the markup always mirrors the coordinator.
pub fn use_overlays() -> Signal<Overlays> {
    use_context::<Signal<Overlays>>()
}

pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

pub fn use_announcer() -> Signal<Announcer> {
    use_context::<Signal<Announcer>>()
}

pub fn use_social_menu() -> Signal<SocialMenuState> {
    use_context::<Signal<SocialMenuState>>()
}

/// Register an element with the page model for the lifetime of the calling
/// component.
pub fn use_page_element(spec: impl FnOnce() -> ElementSpec) -> ElementId {
    let doc = use_page_document();
    let id = use_hook({
        let doc = doc.clone();
        move || {
            let spec = spec();
            let id = spec.id.clone();
            doc.register(spec);
            id
        }
    });
    use_drop({
        let id = id.clone();
        move || doc.unregister(&id)
    });
    id
}

/// `onfocus` / `onfocusout` handlers that keep the page model's active
/// element in step with the webview.
#[derive(Clone, Copy)]
pub struct FocusReporter {
    pub focus: EventHandler<()>,
    pub blur: EventHandler<()>,
}

pub fn use_focus_reporter(id: &ElementId) -> FocusReporter {
    let doc = use_page_document();
    let focus = use_callback({
        let doc = doc.clone();
        let id = id.clone();
        move |()| doc.note_focus(&id)
    });
    let blur = use_callback({
        let id = id.clone();
        move |()| doc.note_blur(&id)
    });
    FocusReporter { focus, blur }
}

/// Show a toast with the configured duration and schedule its removal.
pub fn show_toast(toasts: Signal<ToastQueue>, message: impl Into<String>, kind: ToastKind) -> ToastId {
    show_toast_for(toasts, message, kind, None)
}

/// Show a toast; `duration` overrides the configured one (zero is sticky).
pub fn show_toast_for(
    mut toasts: Signal<ToastQueue>,
    message: impl Into<String>,
    kind: ToastKind,
    duration: Option<Duration>,
) -> ToastId {
    let id = toasts.write().show(message, kind, duration);
    if let Some(after) = toasts.read().dismiss_after(id) {
        spawn(async move {
            tokio::time::sleep(after).await;
            dismiss_toast(toasts, id);
        });
    }
    id
}

/// Start the exit animation, then drop the toast.
pub fn dismiss_toast(mut toasts: Signal<ToastQueue>, id: ToastId) {
    if !toasts.write().hide(id) {
        return;
    }
    let exit = toasts.read().exit_duration();
    spawn(async move {
        tokio::time::sleep(exit).await;
        toasts.write().remove(id);
    });
}

/// Announce `message` to screen readers; it clears itself after a second.
pub fn announce(mut announcer: Signal<Announcer>, message: impl Into<String>) {
    let generation = announcer.write().announce(message);
    spawn(async move {
        tokio::time::sleep(ANNOUNCEMENT_TTL).await;
        announcer.write().clear(generation);
    });
}
