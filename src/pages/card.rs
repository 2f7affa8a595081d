//! Card page - the business card itself.
//!
//! Header, promo video, contact actions, services and social links, with
//! the call modal and chat widget rendered after the main content so they
//! come last in document order.

use dioxus::prelude::*;

use crate::components::{
    ActionButtons, CallModal, ChatWidget, LazyVideoPlayer, ServiceList, SocialMenu,
};
use crate::context::use_card_config;

#[component]
pub fn Card() -> Element {
    let config = use_card_config();
    let business = &config.business;

    rsx! {
        a { class: "skip-link", href: "#main-content", "Skip to content" }

        main { id: "main-content", class: "card",
            header { class: "card-header",
                h1 { class: "business-name", "{business.business_name}" }
                p { class: "contact-name", "{business.contact_name}" }
                p { class: "tagline", "{business.tagline}" }
            }

            for (index, settings) in config.videos.iter().enumerate() {
                LazyVideoPlayer { key: "{index}", index, settings: settings.clone() }
            }

            ActionButtons {}
            ServiceList {}
            SocialMenu {}

            footer { class: "card-footer",
                a {
                    href: "{business.website}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{business.website}"
                }
            }
        }

        CallModal {}
        ChatWidget {}
    }
}
