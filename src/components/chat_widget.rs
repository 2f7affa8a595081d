//! Chat Widget
//!
//! Floating button plus a slide-in panel hosting the assistant iframe. The
//! iframe only gets its `src` the first time the panel opens.

use bizcard_core::{chat, track_event, ElementSpec, FrameLoader};
use bizcard_ui::{CloseButton, LoadingIndicator};
use dioxus::prelude::*;

use crate::context::{use_card_config, use_focus_reporter, use_overlays, use_page_element};

#[component]
pub fn ChatWidget() -> Element {
    let settings = use_card_config().chat;
    let mut overlays = use_overlays();
    let mut frame = use_signal(|| FrameLoader::new(settings.iframe_src.clone()));

    use_page_element(|| ElementSpec::container(chat::ID_ROOT));
    let fab_id = use_page_element(|| ElementSpec::focusable(chat::ID_FAB).within(chat::ID_ROOT));
    let overlay_id = use_page_element(|| ElementSpec::container(chat::ID_OVERLAY));
    use_page_element(|| ElementSpec::container(chat::ID_PANEL).within(chat::ID_OVERLAY));
    let close_id =
        use_page_element(|| ElementSpec::focusable(chat::ID_CLOSE).within(chat::ID_PANEL));
    let iframe_id =
        use_page_element(|| ElementSpec::focusable(chat::ID_IFRAME).within(chat::ID_PANEL));

    let fab_focus = use_focus_reporter(&fab_id);
    let close_focus = use_focus_reporter(&close_id);
    let iframe_focus = use_focus_reporter(&iframe_id);

    use_effect(move || {
        overlays.write().register(chat::CHAT_OVERLAY, chat::overlay_config());
    });
    use_drop(move || {
        if let Ok(mut overlays) = overlays.try_write() {
            overlays.unregister(chat::CHAT_OVERLAY);
        }
    });

    // Assign the iframe source on first open.
    use_effect(move || {
        let open = overlays.read().is_open(chat::CHAT_OVERLAY);
        let idle = frame.peek().src().is_none();
        if open && idle && frame.write().ensure_loaded() {
            tracing::debug!("chat iframe loading");
        }
    });

    let open = overlays.read().is_open(chat::CHAT_OVERLAY);
    let loading = frame.read().is_loading();
    let src = frame.read().src().map(str::to_string);
    let fab_label = format!("Chat con {}", settings.agent_name);

    rsx! {
        div { id: chat::ID_ROOT, class: "chat-widget",
            button {
                id: chat::ID_FAB,
                class: if open { "chat-fab active" } else { "chat-fab" },
                r#type: "button",
                "aria-label": "{fab_label}",
                "aria-haspopup": "dialog",
                "aria-controls": chat::ID_PANEL,
                "aria-expanded": if open { "true" } else { "false" },
                onfocus: move |_| fab_focus.focus.call(()),
                onfocusout: move |_| fab_focus.blur.call(()),
                onclick: move |_| {
                    if overlays.write().toggle(chat::CHAT_OVERLAY) {
                        track_event("chat_toggle", "fab");
                    }
                },
                span { "aria-hidden": "true", "\u{1F4AC}" }
            }
        }

        div {
            id: chat::ID_OVERLAY,
            class: if open { "chat-overlay open" } else { "chat-overlay" },
            "data-open": if open { "true" } else { "false" },
            "aria-hidden": if open { "false" } else { "true" },
            hidden: !open,
            onclick: move |_| {
                overlays.write().handle_click(chat::CHAT_OVERLAY, &overlay_id);
            },

            aside {
                id: chat::ID_PANEL,
                class: "chat-panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{settings.iframe_title}",
                onclick: move |e| e.stop_propagation(),

                header { class: "chat-header",
                    span { class: "chat-agent", "{settings.agent_name}" }
                    CloseButton {
                        id: chat::ID_CLOSE.to_string(),
                        label: settings.close_label.clone(),
                        onfocus: close_focus.focus,
                        onblur: close_focus.blur,
                        onclick: move |_| {
                            overlays.write().close(chat::CHAT_OVERLAY);
                        },
                    }
                }

                div { class: "chat-body",
                    LoadingIndicator {
                        id: chat::ID_LOADING,
                        text: settings.loading_text.clone(),
                        visible: loading,
                    }
                    iframe {
                        id: chat::ID_IFRAME,
                        class: "chat-frame",
                        title: "{settings.iframe_title}",
                        src,
                        "sandbox": "{settings.sandbox}",
                        "allow": "{settings.allow}",
                        onfocus: move |_| iframe_focus.focus.call(()),
                        onfocusout: move |_| iframe_focus.blur.call(()),
                        onload: move |_| {
                            if frame.peek().is_loading() {
                                frame.write().on_load();
                                tracing::debug!("chat iframe loaded");
                            }
                        },
                    }
                }
            }
        }
    }
}
