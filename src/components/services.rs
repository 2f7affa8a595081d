//! Services list linking to the business website.

use bizcard_core::track_event;
use dioxus::prelude::*;

use crate::context::use_card_config;

#[component]
pub fn ServiceList() -> Element {
    let services = use_card_config().business.services;

    rsx! {
        section { class: "services", "aria-labelledby": "services-title",
            h2 { id: "services-title", class: "section-title", "Services" }
            ul { class: "service-grid",
                for link in services {
                    li { key: "{link.url}",
                        a {
                            class: "service-link",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            onclick: {
                                let label = link.label.clone();
                                move |_| track_event("service_click", &label)
                            },
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
