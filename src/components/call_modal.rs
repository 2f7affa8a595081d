//! Call Modal
//!
//! Phone number with copy and dial actions. Focus, scroll-lock and Escape
//! handling come from the overlay coordinator; this component only renders
//! the markup and reports clicks.

use bizcard_core::clipboard::{copy_feedback, write_text};
use bizcard_core::contact::tel_url;
use bizcard_core::{call, track_event, ElementSpec};
use bizcard_ui::{Button, ButtonVariant, CloseButton};
use dioxus::prelude::*;

use crate::context::{
    announce, show_toast, use_announcer, use_card_config, use_focus_reporter, use_overlays,
    use_page_element, use_toasts,
};
use crate::platform::SystemClipboard;

#[component]
pub fn CallModal() -> Element {
    let config = use_card_config();
    let mut overlays = use_overlays();
    let toasts = use_toasts();
    let announcer = use_announcer();

    let modal_id = use_page_element(|| ElementSpec::container(call::ID_MODAL));
    use_page_element(|| ElementSpec::container(call::ID_PANEL).within(call::ID_MODAL));
    let close_id =
        use_page_element(|| ElementSpec::focusable(call::ID_CLOSE).within(call::ID_PANEL));
    let copy_id = use_page_element(|| ElementSpec::focusable(call::ID_COPY).within(call::ID_PANEL));
    let dial_id = use_page_element(|| ElementSpec::focusable(call::ID_DIAL).within(call::ID_PANEL));

    let close_focus = use_focus_reporter(&close_id);
    let copy_focus = use_focus_reporter(&copy_id);
    let dial_focus = use_focus_reporter(&dial_id);

    // Bind the overlay once its markup is in the page model.
    use_effect(move || {
        overlays.write().register(call::CALL_OVERLAY, call::overlay_config());
    });
    use_drop(move || {
        if let Ok(mut overlays) = overlays.try_write() {
            overlays.unregister(call::CALL_OVERLAY);
        }
    });

    let phone = config.business.phone_display.clone();
    let copy_number = move |_: ()| {
        let phone = phone.clone();
        spawn(async move {
            let result = write_text(SystemClipboard, phone).await;
            match &result {
                Ok(()) => {
                    track_event("phone_number_copied", "call_modal");
                    announce(announcer, "Phone number copied");
                }
                Err(e) => tracing::warn!("Clipboard not available: {}", e),
            }
            let (kind, message) = copy_feedback(&result);
            show_toast(toasts, message, kind);
        });
    };

    let open = overlays.read().is_open(call::CALL_OVERLAY);

    rsx! {
        div {
            id: call::ID_MODAL,
            class: if open { "modal-overlay open" } else { "modal-overlay" },
            "data-open": if open { "true" } else { "false" },
            "aria-hidden": if open { "false" } else { "true" },
            hidden: !open,
            onclick: move |_| {
                overlays.write().handle_click(call::CALL_OVERLAY, &modal_id);
            },

            div {
                id: call::ID_PANEL,
                class: "modal-panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "callModalTitle",
                onclick: move |e| e.stop_propagation(),

                CloseButton {
                    id: call::ID_CLOSE.to_string(),
                    label: "Close call dialog".to_string(),
                    onfocus: close_focus.focus,
                    onblur: close_focus.blur,
                    onclick: move |_| {
                        overlays.write().close(call::CALL_OVERLAY);
                    },
                }

                h2 { id: "callModalTitle", class: "modal-title", "Call {config.business.business_name}" }
                p { class: "call-number", "{config.business.phone_display}" }

                div { class: "modal-actions",
                    Button {
                        id: call::ID_COPY.to_string(),
                        variant: ButtonVariant::Secondary,
                        onfocus: copy_focus.focus,
                        onblur: copy_focus.blur,
                        onclick: copy_number,
                        "Copy number"
                    }
                    a {
                        id: call::ID_DIAL,
                        class: "btn-primary",
                        href: tel_url(&config.business),
                        onfocus: move |_| dial_focus.focus.call(()),
                        onfocusout: move |_| dial_focus.blur.call(()),
                        onclick: move |_| track_event("phone_call", "call_modal"),
                        "Call now"
                    }
                }
            }
        }
    }
}
