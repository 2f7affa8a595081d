//! Social Menu
//!
//! Row of social links. On narrow windows the row collapses behind a toggle
//! button driven by [`Disclosure`].

use bizcard_core::menu::{ID_STRIP, ID_TOGGLE};
use bizcard_core::{track_event, Disclosure, ElementId, ElementSpec, SocialPlatform};
use bizcard_ui::IconButton;
use dioxus::prelude::*;

use crate::context::{
    use_card_config, use_focus_reporter, use_page_document, use_page_element, use_social_menu,
};

fn link_id(index: usize) -> ElementId {
    ElementId::new(format!("social-link-{}", index))
}

#[component]
pub fn SocialMenu() -> Element {
    let socials = use_card_config().business.socials;
    let doc = use_page_document();
    let mut menu = use_social_menu();

    let toggle_id = use_page_element(|| ElementSpec::focusable(ID_TOGGLE));
    use_page_element(|| ElementSpec::container(ID_STRIP));
    use_hook({
        let doc = doc.clone();
        let count = socials.len();
        move || {
            for index in 0..count {
                doc.register(ElementSpec::focusable(link_id(index)).within(ID_STRIP));
            }
        }
    });
    let toggle_focus = use_focus_reporter(&toggle_id);

    use_effect({
        let doc = doc.clone();
        move || menu.set(Disclosure::mount(doc.clone(), ID_TOGGLE, ID_STRIP))
    });
    use_drop(move || {
        if let Ok(mut menu) = menu.try_write() {
            *menu = None;
        }
    });

    let open = menu.read().as_ref().is_some_and(Disclosure::is_open);

    rsx! {
        nav { class: "social-menu", "aria-label": "Social media",
            div {
                class: "social-menu-inner",
                // Clicks inside must not reach the outside-click handler.
                onclick: move |e| e.stop_propagation(),

                IconButton {
                    id: ID_TOGGLE.to_string(),
                    class: "mobile-social-toggle".to_string(),
                    aria_label: "Social media links".to_string(),
                    aria_expanded: open,
                    aria_controls: ID_STRIP.to_string(),
                    onfocus: toggle_focus.focus,
                    onblur: toggle_focus.blur,
                    onclick: move |_| {
                        if let Some(menu) = menu.write().as_mut() {
                            menu.toggle();
                        }
                    },
                    "\u{2026}"
                }

                ul {
                    id: ID_STRIP,
                    class: if open { "social-strip open" } else { "social-strip" },
                    "data-open": if open { "true" } else { "false" },
                    for (index, link) in socials.iter().enumerate() {
                        li { key: "{index}",
                            a {
                                id: "{link_id(index)}",
                                class: "social-link",
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "aria-label": "{link.label}",
                                onfocus: {
                                    let doc = doc.clone();
                                    move |_| doc.note_focus(&link_id(index))
                                },
                                onfocusout: {
                                    let doc = doc.clone();
                                    move |_| doc.note_blur(&link_id(index))
                                },
                                onclick: {
                                    let platform = SocialPlatform::from_url(&link.url);
                                    move |_| track_event("social_click", platform.label())
                                },
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
