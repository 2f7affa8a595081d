//! Digital Business Card Core Library
//!
//! Headless interaction logic for a single-page business card: accessible
//! overlays (call modal, chat panel), toasts, a live region announcer, the
//! collapsible social menu and lazy media. Nothing in here depends on a UI
//! toolkit; components talk to the page through [`Document`].
//!
//! ## Overlay contract
//!
//! - **Idempotent**: `open` on an open overlay and `close` on a closed one do
//!   nothing
//! - **Focus trap**: Tab / Shift+Tab wrap inside the panel while open
//! - **Restoration**: close returns focus to the element focused before open
//!   and restores the body scroll style it found
//! - **One at a time**: the [`OverlayCoordinator`] closes the active overlay
//!   before opening another
//!
//! ## Quick Start
//!
//! ```ignore
//! use bizcard_core::{ElementSpec, KeyInput, OverlayConfig, OverlayCoordinator, OverlayId, PageDocument};
//!
//! const CALL: OverlayId = OverlayId::new("call");
//!
//! let doc = PageDocument::new();
//! doc.register(ElementSpec::focusable("call-btn"));
//! doc.register(ElementSpec::container("call-modal"));
//! doc.register(ElementSpec::focusable("call-close").within("call-modal"));
//!
//! let mut overlays = OverlayCoordinator::new(doc.clone());
//! overlays.register(CALL, OverlayConfig::new("call-modal").with_close_control("call-close"));
//!
//! overlays.open(CALL);
//! overlays.handle_key(KeyInput::escape());
//! ```

pub mod analytics;
pub mod call;
pub mod chat;
pub mod clipboard;
pub mod config;
pub mod contact;
pub mod coordinator;
pub mod document;
pub mod error;
pub mod live_region;
pub mod logging;
pub mod media;
pub mod menu;
pub mod overlay;
pub mod toast;
pub mod vcard;

// Re-exports
pub use analytics::track_event;
pub use chat::{ChatSettings, FrameLoader, FrameState};
pub use clipboard::Clipboard;
pub use config::{BusinessDetails, CardConfig, NamedLink, ToastSettings, VideoSettings};
pub use contact::{is_mobile, SocialPlatform};
pub use coordinator::{OverlayCoordinator, OverlayId};
pub use document::{Document, ElementId, ElementSpec, ListenerChange, ListenerId, PageDocument};
pub use error::{CardError, CardResult};
pub use live_region::Announcer;
pub use logging::LoggingBuilder;
pub use media::{LazyVideo, VideoAction};
pub use menu::Disclosure;
pub use overlay::{Key, KeyInput, KeyOutcome, KeyTrap, Overlay, OverlayConfig, OverlayState};
pub use toast::{Toast, ToastId, ToastKind, ToastPhase, ToastQueue};
