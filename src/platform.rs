//! Desktop platform glue.
//!
//! The headless page model in `bizcard-core` decides what should happen; the
//! functions here make it happen in the webview and the host OS.

use std::path::PathBuf;

use bizcard_core::{is_mobile, CardError, CardResult, Clipboard, ElementId, ListenerChange};
use dioxus::prelude::*;
use serde::Deserialize;

/// Quote a string as a JavaScript literal.
fn js_string(value: &str) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(quoted) => Some(quoted),
        Err(e) => {
            tracing::warn!("Failed to quote script argument: {}", e);
            None
        }
    }
}

/// Frames to wait for an element to become focusable before giving up.
const FOCUS_ATTEMPTS: u32 = 10;

/// Move webview focus to the element with `id`.
///
/// The model changes focus inside event handlers, before the re-render that
/// un-hides an overlay reaches the webview, and `focus()` on a hidden element
/// is a no-op. The script retries on the next animation frames until the
/// element takes focus. A newer request supersedes an older one.
pub fn focus_element(id: &ElementId) {
    if let Some(quoted) = js_string(id.as_str()) {
        document::eval(&focus_script(&quoted));
    }
}

fn focus_script(quoted_id: &str) -> String {
    format!(
        r#"
        const seq = (window.bizcardFocusSeq = (window.bizcardFocusSeq || 0) + 1);
        let attempts = 0;
        const attempt = () => {{
            if (seq !== window.bizcardFocusSeq) return;
            const el = document.getElementById({quoted_id});
            if (el) {{
                el.focus({{ preventScroll: true }});
                if (document.activeElement === el) return;
            }}
            if (++attempts < {FOCUS_ATTEMPTS}) requestAnimationFrame(attempt);
        }};
        requestAnimationFrame(attempt);
        "#
    )
}

/// Install or remove the webview half of a key trap.
///
/// While installed, a capture-phase document listener suppresses the default
/// action of Tab and Escape, so focus can only move where the overlay sends
/// it. The keys themselves reach the app through [`page_key_events`].
pub fn apply_listener_change(change: ListenerChange) {
    tracing::debug!(?change, "key trap listener");
    document::eval(&trap_script(change));
}

fn trap_script(change: ListenerChange) -> String {
    match change {
        ListenerChange::Added(listener) => format!(
            r#"
            window.bizcardKeyTraps = window.bizcardKeyTraps || new Map();
            const trap = (e) => {{
                if (e.key === "Tab" || e.key === "Escape") e.preventDefault();
            }};
            window.bizcardKeyTraps.set({id}, trap);
            document.addEventListener("keydown", trap, true);
            "#,
            id = listener.as_u64()
        ),
        ListenerChange::Removed(listener) => format!(
            r#"
            const traps = window.bizcardKeyTraps;
            const trap = traps && traps.get({id});
            if (trap) {{
                document.removeEventListener("keydown", trap, true);
                traps.delete({id});
            }}
            "#,
            id = listener.as_u64()
        ),
    }
}

/// A Tab or Escape keydown heard at document level.
#[derive(Debug, Clone, Deserialize)]
pub struct PageKey {
    pub key: String,
    pub shift: bool,
}

/// Subscribe to Tab and Escape keydowns on the whole document, whatever
/// element (or `<body>`) they target. Read events with
/// `recv::<PageKey>()`.
pub fn page_key_events() -> document::Eval {
    document::eval(
        r#"
        document.addEventListener("keydown", (e) => {
            if (e.key !== "Tab" && e.key !== "Escape") return;
            dioxus.send({ key: e.key, shift: e.shiftKey });
        });
        "#,
    )
}

/// Mirror the page model's scroll-lock onto the webview body.
pub fn apply_body_overflow(value: &str) {
    if let Some(quoted) = js_string(value) {
        document::eval(&format!("document.body.style.overflow = {};", quoted));
    }
}

/// Mobile layout check against the current window size.
pub fn window_is_mobile() -> bool {
    let desktop = dioxus::desktop::window();
    let size = desktop.window.inner_size().to_logical::<f64>(desktop.window.scale_factor());
    is_mobile(size.width, "")
}

/// Whether the OS asks for reduced motion. The webview exposes the media
/// query; read it once per call.
pub async fn prefers_reduced_motion() -> bool {
    let mut eval =
        document::eval("dioxus.send(window.matchMedia('(prefers-reduced-motion: reduce)').matches);");
    match eval.recv::<bool>().await {
        Ok(reduced) => reduced,
        Err(e) => {
            tracing::debug!("reduced motion query failed: {:?}", e);
            false
        }
    }
}

/// Where "Add to contacts" writes the vCard.
pub fn download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// System clipboard via arboard.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: String) -> CardResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| CardError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| CardError::Clipboard(e.to_string()))
    }
}
