use bizcard_core::{
    track_event, Disclosure, Document, Key as OverlayKey, KeyInput, KeyOutcome, OverlayCoordinator,
    OverlayId, PageDocument, ToastKind, ToastQueue,
};
use bizcard_ui::{LiveRegion, ToastStack};
use dioxus::prelude::*;

use crate::context::{dismiss_toast, show_toast_for, Overlays, SocialMenuState};
use crate::pages::Card;
use crate::platform;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The business card
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Card {},
}

/// Map a DOM `KeyboardEvent.key` to the input overlays react to. Other keys
/// never reach the coordinator.
pub fn overlay_key(key: &str, shift: bool) -> Option<KeyInput> {
    match key {
        "Tab" => Some(KeyInput {
            key: OverlayKey::Tab,
            shift,
        }),
        "Escape" | "Esc" => Some(KeyInput::escape()),
        _ => None,
    }
}

/// Document keydown: the active overlay first, then the social menu.
fn route_page_key(
    mut overlays: Signal<Overlays>,
    mut social: Signal<SocialMenuState>,
    input: KeyInput,
) -> KeyOutcome {
    let mut outcome = KeyOutcome::PassThrough;
    if overlays.peek().active().is_some() {
        outcome = overlays.write().dispatch_key(input);
    }
    if outcome == KeyOutcome::PassThrough
        && social.peek().as_ref().is_some_and(Disclosure::is_open)
    {
        if let Some(menu) = social.write().as_mut() {
            outcome = menu.handle_key(input);
        }
    }
    outcome
}

/// Root application component.
///
/// Provides global styles, the page model, overlay/toast/announcer state and
/// routing. Document-level keyboard and click handling lives here.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(crate::card_config);
    let doc = use_context_provider(|| {
        PageDocument::new()
            .with_focus_sink(platform::focus_element)
            .with_listener_sink(platform::apply_listener_change)
    });

    let overlays: Signal<Overlays> = use_signal(|| OverlayCoordinator::new(doc.clone()));
    let toasts = use_signal(|| ToastQueue::new(config.toast.duration(), config.toast.exit()));
    let announcer = use_signal(bizcard_core::Announcer::new);
    let mut social: Signal<SocialMenuState> = use_signal(|| None);
    let mut last_active: Signal<Option<OverlayId>> = use_signal(|| None);

    use_context_provider(|| overlays);
    use_context_provider(|| toasts);
    use_context_provider(|| announcer);
    use_context_provider(|| social);

    // Mirror the scroll-lock onto the webview body.
    use_effect(move || {
        let overflow = overlays.read().document().body_overflow();
        platform::apply_body_overflow(&overflow);
    });

    // Analytics for every open/close, whichever path triggered it.
    use_effect(move || {
        let active = overlays.read().active();
        let previous = *last_active.peek();
        if previous == active {
            return;
        }
        if let Some(closed) = previous {
            track_event("overlay_closed", closed.as_str());
        }
        if let Some(opened) = active {
            track_event("overlay_opened", opened.as_str());
        }
        last_active.set(active);
    });

    use_hook(move || {
        tracing::info!("Business card ready");
        show_toast_for(
            toasts,
            "Digital Business Card loaded successfully!",
            ToastKind::Info,
            Some(std::time::Duration::from_millis(2000)),
        );
    });

    // Keys are heard on the document, not on a component, so they still
    // arrive when focus has fallen back to <body>.
    use_future(move || async move {
        let mut keys = platform::page_key_events();
        while let Ok(key) = keys.recv::<platform::PageKey>().await {
            let Some(input) = overlay_key(&key.key, key.shift) else {
                continue;
            };
            let outcome = route_page_key(overlays, social, input);
            tracing::trace!(?input, ?outcome, "page key");
        }
        tracing::warn!("page key listener closed");
    });

    // Clicks that reach the root landed outside the social menu.
    let onclick = move |_: MouseEvent| {
        if social.peek().as_ref().is_some_and(Disclosure::is_open) {
            if let Some(menu) = social.write().as_mut() {
                menu.handle_document_click(None);
            }
        }
    };

    let toast_list: Vec<_> = toasts.read().iter().cloned().collect();
    let message = announcer.read().message().to_string();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-root", onclick,
            Router::<Route> {}
            ToastStack {
                toasts: toast_list,
                on_dismiss: move |id| dismiss_toast(toasts, id),
            }
            LiveRegion { message }
        }
    }
}
