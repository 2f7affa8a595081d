//! Chat widget: a floating button that opens an overlay panel hosting a
//! third-party chat iframe.
//!
//! The iframe source is only assigned the first time the panel opens, so the
//! page does not pay for the embedded app until someone asks for it.

use serde::{Deserialize, Serialize};

use crate::coordinator::OverlayId;
use crate::overlay::OverlayConfig;

pub const CHAT_OVERLAY: OverlayId = OverlayId::new("chat");

pub const ID_ROOT: &str = "bizcard-chat-root";
pub const ID_OVERLAY: &str = "bizcard-chat-overlay";
pub const ID_PANEL: &str = "bizcard-chat-panel";
pub const ID_IFRAME: &str = "bizcard-chat-iframe";
pub const ID_LOADING: &str = "bizcard-chat-loading";
pub const ID_CLOSE: &str = "bizcard-chat-close";
pub const ID_FAB: &str = "bizcard-chat-fab";

/// Chat widget settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    pub agent_name: String,
    pub iframe_src: String,
    pub iframe_title: String,
    pub close_label: String,
    pub loading_text: String,
    pub sandbox: String,
    pub allow: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            agent_name: "Sofía".to_string(),
            iframe_src:
                "https://ai.studio/apps/drive/1FAK0YcUXgtUfc_BK2NwWaJKIXsvgYcgH?fullscreenApplet=true"
                    .to_string(),
            iframe_title: "Chat con Sofía".to_string(),
            close_label: "Cerrar chat".to_string(),
            loading_text: "Cargando chat…".to_string(),
            sandbox: "allow-scripts allow-same-origin allow-forms allow-popups allow-popups-to-escape-sandbox"
                .to_string(),
            allow: "fullscreen; clipboard-read; clipboard-write; microphone; camera".to_string(),
        }
    }
}

/// Overlay roles for the chat panel.
pub fn overlay_config() -> OverlayConfig {
    OverlayConfig::new(ID_OVERLAY)
        .with_panel(ID_PANEL)
        .with_close_control(ID_CLOSE)
        .with_trigger(ID_FAB)
        .with_fallback_focus(ID_FAB)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameState {
    /// No `src` assigned yet
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// Lazy loader for the chat iframe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameLoader {
    pending_src: String,
    src: Option<String>,
    state: FrameState,
}

impl FrameLoader {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            pending_src: src.into(),
            src: None,
            state: FrameState::Idle,
        }
    }

    /// Assign the iframe source on first call. Returns `true` if loading
    /// started now. An empty source never loads.
    pub fn ensure_loaded(&mut self) -> bool {
        if self.state != FrameState::Idle || self.pending_src.is_empty() {
            return false;
        }
        self.src = Some(self.pending_src.clone());
        self.state = FrameState::Loading;
        tracing::debug!(src = %self.pending_src, "chat frame loading");
        true
    }

    /// The iframe fired its `load` event.
    pub fn on_load(&mut self) {
        if self.state == FrameState::Loading {
            self.state = FrameState::Loaded;
        }
    }

    /// Currently assigned `src`, `None` until first open.
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FrameState::Loading
    }
}
