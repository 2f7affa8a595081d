//! Loading indicator shown while embedded content loads.

use dioxus::prelude::*;

/// Spinner with a text label announced as a status.
///
/// ```rust,ignore
/// rsx! {
///     LoadingIndicator { id: "bizcard-chat-loading", text: "Cargando chat…", visible: loading }
/// }
/// ```
#[component]
pub fn LoadingIndicator(
    #[props(into)] id: String,
    #[props(into)] text: String,
    #[props(default = true)] visible: bool,
) -> Element {
    rsx! {
        div {
            id: "{id}",
            class: if visible { "loading-indicator" } else { "loading-indicator hidden" },
            role: "status",
            "aria-hidden": if visible { "false" } else { "true" },
            span { class: "spinner", "aria-hidden": "true" }
            span { class: "loading-text", "{text}" }
        }
    }
}
