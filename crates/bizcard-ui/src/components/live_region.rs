//! Visually hidden live region for screen reader announcements.

use dioxus::prelude::*;

#[component]
pub fn LiveRegion(message: String) -> Element {
    rsx! {
        div {
            id: "live-region",
            class: "sr-only",
            "aria-live": "polite",
            "aria-atomic": "true",
            "{message}"
        }
    }
}
