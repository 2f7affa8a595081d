//! Contact Action Buttons
//!
//! Call, WhatsApp, email, directions and "Add to contacts". On wide windows
//! the call link opens the call modal instead of dialing.

use std::time::Duration;

use bizcard_core::contact::{mailto_url, tel_url, whatsapp_url};
use bizcard_core::{call, track_event, vcard, CardError, ElementSpec, ToastKind};
use bizcard_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::{
    announce, show_toast, use_announcer, use_card_config, use_focus_reporter, use_overlays,
    use_page_element, use_toasts,
};
use crate::platform;

pub const ID_WHATSAPP: &str = "whatsappButton";
pub const ID_EMAIL: &str = "emailButton";
pub const ID_MAPS: &str = "mapsButton";
pub const ID_ADD_CONTACT: &str = "addContactButton";

/// Delay before the mobile hint about opening the downloaded file
const MOBILE_HINT_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn ActionButtons() -> Element {
    let config = use_card_config();
    let mut overlays = use_overlays();
    let toasts = use_toasts();
    let announcer = use_announcer();

    let call_id = use_page_element(|| ElementSpec::focusable(call::ID_TRIGGER));
    let whatsapp_id = use_page_element(|| ElementSpec::focusable(ID_WHATSAPP));
    let email_id = use_page_element(|| ElementSpec::focusable(ID_EMAIL));
    let maps_id = use_page_element(|| ElementSpec::focusable(ID_MAPS));
    let contact_id = use_page_element(|| ElementSpec::focusable(ID_ADD_CONTACT));

    let call_focus = use_focus_reporter(&call_id);
    let whatsapp_focus = use_focus_reporter(&whatsapp_id);
    let email_focus = use_focus_reporter(&email_id);
    let maps_focus = use_focus_reporter(&maps_id);
    let contact_focus = use_focus_reporter(&contact_id);

    let details = config.business.clone();
    let call_open = overlays.read().is_open(call::CALL_OVERLAY);

    let add_contact = move |_: ()| {
        let details = details.clone();
        spawn(async move {
            let dir = platform::download_dir();
            let saved = tokio::task::spawn_blocking(move || vcard::save(&details, &dir))
                .await
                .unwrap_or_else(|e| Err(CardError::Download(e.to_string())));

            match saved {
                Ok(path) => {
                    tracing::info!("vCard saved to {:?}", path);
                    track_event("contact_download", "vcard");
                    show_toast(toasts, "Contact added! Check your downloads.", ToastKind::Success);
                    announce(announcer, "Contact file downloaded");
                    if platform::window_is_mobile() {
                        tokio::time::sleep(MOBILE_HINT_DELAY).await;
                        show_toast(
                            toasts,
                            "Open the downloaded file to add the contact",
                            ToastKind::Info,
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to save vCard: {}", e);
                    show_toast(
                        toasts,
                        "Failed to add contact. Please try again.",
                        ToastKind::Error,
                    );
                }
            }
        });
    };

    rsx! {
        section { class: "action-buttons", "aria-label": "Contact actions",
            a {
                id: call::ID_TRIGGER,
                class: "btn-primary action-call",
                href: tel_url(&config.business),
                "aria-haspopup": "dialog",
                "aria-controls": call::ID_MODAL,
                "aria-expanded": if call_open { "true" } else { "false" },
                onfocus: move |_| call_focus.focus.call(()),
                onfocusout: move |_| call_focus.blur.call(()),
                onclick: move |evt| {
                    if platform::window_is_mobile() {
                        track_event("phone_call", "direct");
                        return;
                    }
                    evt.prevent_default();
                    overlays.write().open(call::CALL_OVERLAY);
                },
                span { class: "action-icon", "aria-hidden": "true", "\u{1F4DE}" }
                "Call"
            }
            a {
                id: ID_WHATSAPP,
                class: "btn-secondary action-whatsapp",
                href: whatsapp_url(&config.business),
                target: "_blank",
                rel: "noopener noreferrer",
                onfocus: move |_| whatsapp_focus.focus.call(()),
                onfocusout: move |_| whatsapp_focus.blur.call(()),
                onclick: move |_| track_event("whatsapp_click", "contact"),
                span { class: "action-icon", "aria-hidden": "true", "\u{1F4AC}" }
                "WhatsApp"
            }
            a {
                id: ID_EMAIL,
                class: "btn-secondary action-email",
                href: mailto_url(&config.business),
                onfocus: move |_| email_focus.focus.call(()),
                onfocusout: move |_| email_focus.blur.call(()),
                onclick: move |_| track_event("email_click", "contact"),
                span { class: "action-icon", "aria-hidden": "true", "\u{2709}" }
                "Email"
            }
            a {
                id: ID_MAPS,
                class: "btn-secondary action-maps",
                href: "{config.business.maps_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                onfocus: move |_| maps_focus.focus.call(()),
                onfocusout: move |_| maps_focus.blur.call(()),
                onclick: move |_| track_event("maps_click", "directions"),
                span { class: "action-icon", "aria-hidden": "true", "\u{1F4CD}" }
                "Directions"
            }
            Button {
                id: ID_ADD_CONTACT.to_string(),
                variant: ButtonVariant::Secondary,
                class: "action-contact".to_string(),
                onfocus: contact_focus.focus,
                onblur: contact_focus.blur,
                onclick: add_contact,
                span { class: "action-icon", "aria-hidden": "true", "\u{1F464}" }
                "Add to contacts"
            }
        }
    }
}
