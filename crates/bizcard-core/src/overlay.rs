//! Accessible overlay (modal dialog / slide-in panel).
//!
//! An [`Overlay`] owns the open/closed lifecycle of one modal-like panel:
//!
//! - **Visibility**: `data-open` / `aria-hidden` on the root, `aria-expanded`
//!   on every trigger control
//! - **Scroll-lock**: the body `overflow` style is saved on open, set to
//!   `hidden`, and restored verbatim on close
//! - **Focus trap**: Tab / Shift+Tab wrap inside the panel while open
//! - **Focus restore**: the element focused before opening gets focus back
//!   (or a fallback control if it disappeared)
//!
//! The document key listener backing the trap is a [`KeyTrap`] guard, so it
//! is released on every exit from the open state, including the overlay
//! being dropped while open.

use crate::document::{Document, ElementId, ListenerId};
use crate::error::{CardError, CardResult};

/// Value the body `overflow` style takes while an overlay is open.
pub const SCROLL_LOCK: &str = "hidden";

/// Keys the overlay cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Other,
}

/// A key press as seen by a document-level listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
}

impl KeyInput {
    pub fn tab() -> Self {
        Self { key: Key::Tab, shift: false }
    }

    pub fn shift_tab() -> Self {
        Self { key: Key::Tab, shift: true }
    }

    pub fn escape() -> Self {
        Self { key: Key::Escape, shift: false }
    }

    pub fn other() -> Self {
        Self { key: Key::Other, shift: false }
    }
}

/// What the page should do with a key after the overlay saw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Default browser behavior applies
    PassThrough,
    /// The overlay acted on the key; suppress the default
    Handled,
}

impl KeyOutcome {
    pub fn prevents_default(self) -> bool {
        matches!(self, KeyOutcome::Handled)
    }
}

/// Document key listener held while an overlay traps focus.
///
/// Dropping the guard removes the listener.
#[must_use = "dropping the trap releases the key listener immediately"]
pub struct KeyTrap<D: Document> {
    doc: D,
    listener: ListenerId,
}

impl<D: Document> KeyTrap<D> {
    pub fn install(doc: &D) -> Self {
        Self {
            doc: doc.clone(),
            listener: doc.add_key_listener(),
        }
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }
}

impl<D: Document> Drop for KeyTrap<D> {
    fn drop(&mut self) {
        self.doc.remove_key_listener(self.listener);
    }
}

/// Lifecycle state of an overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Structural roles an overlay recognizes in its markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayConfig {
    /// Full-screen root; a click on it (not on the panel) closes
    pub root: ElementId,
    /// Dialog panel; focus is trapped within it. Defaults to the root.
    pub panel: Option<ElementId>,
    /// Preferred initial focus target
    pub close_control: Option<ElementId>,
    /// Controls that open the overlay and mirror its state in `aria-expanded`
    pub triggers: Vec<ElementId>,
    /// Focus target on close when the previously focused element is gone
    pub fallback_focus: Option<ElementId>,
}

impl OverlayConfig {
    pub fn new(root: impl Into<ElementId>) -> Self {
        Self {
            root: root.into(),
            panel: None,
            close_control: None,
            triggers: Vec::new(),
            fallback_focus: None,
        }
    }

    pub fn with_panel(mut self, panel: impl Into<ElementId>) -> Self {
        self.panel = Some(panel.into());
        self
    }

    pub fn with_close_control(mut self, close: impl Into<ElementId>) -> Self {
        self.close_control = Some(close.into());
        self
    }

    pub fn with_trigger(mut self, trigger: impl Into<ElementId>) -> Self {
        self.triggers.push(trigger.into());
        self
    }

    pub fn with_fallback_focus(mut self, fallback: impl Into<ElementId>) -> Self {
        self.fallback_focus = Some(fallback.into());
        self
    }

    /// Element whose descendants form the focusable set.
    pub fn focus_scope(&self) -> &ElementId {
        self.panel.as_ref().unwrap_or(&self.root)
    }
}

/// An accessible modal overlay bound to a document.
pub struct Overlay<D: Document> {
    doc: D,
    config: OverlayConfig,
    state: OverlayState,
    previously_focused: Option<ElementId>,
    trap: Option<KeyTrap<D>>,
    saved_body_overflow: String,
}

impl<D: Document> Overlay<D> {
    /// Bind an overlay to its markup.
    ///
    /// Fails with [`CardError::MissingElement`] when the root (or a declared
    /// panel) is not on the page; callers treat that as "component
    /// disabled".
    pub fn mount(doc: D, config: OverlayConfig) -> CardResult<Self> {
        if !doc.contains(&config.root) {
            return Err(CardError::MissingElement(config.root.to_string()));
        }
        if let Some(panel) = &config.panel {
            if !doc.contains(panel) {
                return Err(CardError::MissingElement(panel.to_string()));
            }
        }

        let overlay = Self {
            doc,
            config,
            state: OverlayState::Closed,
            previously_focused: None,
            trap: None,
            saved_body_overflow: String::new(),
        };
        overlay.publish_state();
        Ok(overlay)
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    pub fn has_key_trap(&self) -> bool {
        self.trap.is_some()
    }

    /// Element that will receive focus on close.
    pub fn previously_focused(&self) -> Option<&ElementId> {
        self.previously_focused.as_ref()
    }

    /// Current focusable set, recomputed from the page on every call.
    pub fn focusable(&self) -> Vec<ElementId> {
        self.doc.focusable_within(self.config.focus_scope())
    }

    /// Open the overlay. Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = OverlayState::Open;

        self.previously_focused = self.doc.active_element();
        self.saved_body_overflow = self.doc.body_overflow();
        self.doc.set_body_overflow(SCROLL_LOCK);
        self.publish_state();

        let focusable = self.focusable();
        let Some(first) = focusable.first() else {
            tracing::debug!(overlay = %self.config.root, "no focusable elements, focus not trapped");
            return true;
        };

        self.trap = Some(KeyTrap::install(&self.doc));
        let target = self
            .config
            .close_control
            .as_ref()
            .filter(|close| focusable.contains(close))
            .unwrap_or(first);
        self.doc.focus(target);

        tracing::debug!(overlay = %self.config.root, focus = %target, "overlay opened");
        true
    }

    /// Close the overlay. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = OverlayState::Closed;
        self.publish_state();

        self.trap = None;
        self.doc.set_body_overflow(&self.saved_body_overflow);

        let restored = self
            .previously_focused
            .take()
            .is_some_and(|previous| self.doc.focus(&previous));
        if !restored {
            if let Some(fallback) = &self.config.fallback_focus {
                self.doc.focus(fallback);
            }
        }

        tracing::debug!(overlay = %self.config.root, restored, "overlay closed");
        true
    }

    pub fn toggle(&mut self) -> bool {
        if self.is_open() {
            self.close()
        } else {
            self.open()
        }
    }

    /// Document-level keydown handling.
    pub fn handle_key(&mut self, input: KeyInput) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::PassThrough;
        }
        match input.key {
            Key::Escape => {
                self.close();
                KeyOutcome::Handled
            }
            Key::Tab if self.trap.is_some() => self.wrap_focus(input.shift),
            _ => KeyOutcome::PassThrough,
        }
    }

    /// Keydown heard by the trap listener.
    ///
    /// The page suppresses the default action of Tab and Escape while a trap
    /// is installed, so a Tab that does not wrap moves focus here as well.
    pub fn handle_trapped_key(&mut self, input: KeyInput) -> KeyOutcome {
        let outcome = self.handle_key(input);
        if outcome == KeyOutcome::PassThrough && input.key == Key::Tab && self.trap.is_some() {
            return self.step_focus(input.shift);
        }
        outcome
    }

    /// Click anywhere on the overlay. Only a click whose target is the root
    /// itself (the backdrop) closes.
    pub fn handle_click(&mut self, target: &ElementId) -> bool {
        if target == &self.config.root {
            self.close()
        } else {
            false
        }
    }

    fn wrap_focus(&mut self, backwards: bool) -> KeyOutcome {
        let focusable = self.focusable();
        let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
            return KeyOutcome::PassThrough;
        };
        let active = self.doc.active_element();
        let inside = active.as_ref().is_some_and(|a| focusable.contains(a));

        let target = match (backwards, inside) {
            (true, true) if active.as_ref() == Some(first) => last,
            (false, true) if active.as_ref() == Some(last) => first,
            (_, true) => return KeyOutcome::PassThrough,
            // Focus escaped the set (e.g. a click on the panel body); pull it back.
            (true, false) => last,
            (false, false) => first,
        };
        self.doc.focus(target);
        KeyOutcome::Handled
    }

    /// Move to the neighbouring control. Only called when focus is inside
    /// the set and not on the boundary that wraps.
    fn step_focus(&mut self, backwards: bool) -> KeyOutcome {
        let focusable = self.focusable();
        let position = self
            .doc
            .active_element()
            .and_then(|active| focusable.iter().position(|id| *id == active));
        let next = match (position, backwards) {
            (Some(i), true) => i.checked_sub(1),
            (Some(i), false) => Some(i + 1),
            (None, _) => None,
        };
        match next.and_then(|i| focusable.get(i)) {
            Some(target) => {
                self.doc.focus(target);
                KeyOutcome::Handled
            }
            None => KeyOutcome::PassThrough,
        }
    }

    fn publish_state(&self) {
        let open = self.is_open();
        self.doc.set_visible(&self.config.root, open);
        self.doc
            .set_attribute(&self.config.root, "data-open", bool_attr(open));
        self.doc
            .set_attribute(&self.config.root, "aria-hidden", bool_attr(!open));
        for trigger in &self.config.triggers {
            self.doc.set_attribute(trigger, "aria-expanded", bool_attr(open));
        }
    }
}

impl<D: Document> Drop for Overlay<D> {
    fn drop(&mut self) {
        if self.is_open() {
            self.close();
        }
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ElementSpec, PageDocument};

    fn page() -> PageDocument {
        let doc = PageDocument::new();
        doc.register(ElementSpec::focusable("call-btn"));
        doc.register(ElementSpec::container("modal"));
        doc.register(ElementSpec::container("panel").within("modal"));
        doc.register(ElementSpec::focusable("number").within("panel"));
        doc.register(ElementSpec::focusable("close").within("panel"));
        doc.register(ElementSpec::focusable("copy").within("panel"));
        doc
    }

    fn config() -> OverlayConfig {
        OverlayConfig::new("modal")
            .with_panel("panel")
            .with_close_control("close")
            .with_trigger("call-btn")
            .with_fallback_focus("call-btn")
    }

    fn id(s: &str) -> ElementId {
        ElementId::from(s)
    }

    #[test]
    fn mount_requires_root() {
        let doc = PageDocument::new();
        let err = Overlay::mount(doc, OverlayConfig::new("missing")).err();
        assert!(matches!(err, Some(CardError::MissingElement(ref id)) if id == "missing"));
    }

    #[test]
    fn mount_publishes_closed_state() {
        let doc = page();
        let _overlay = Overlay::mount(doc.clone(), config()).unwrap();
        assert_eq!(doc.attribute(&id("modal"), "data-open").as_deref(), Some("false"));
        assert_eq!(doc.attribute(&id("modal"), "aria-hidden").as_deref(), Some("true"));
        assert_eq!(doc.attribute(&id("call-btn"), "aria-expanded").as_deref(), Some("false"));
    }

    #[test]
    fn open_prefers_close_control() {
        let doc = page();
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        doc.focus(&id("call-btn"));

        assert!(overlay.open());
        assert_eq!(doc.active_element(), Some(id("close")));
        assert_eq!(doc.body_overflow(), SCROLL_LOCK);
        assert_eq!(doc.key_listener_count(), 1);
        assert_eq!(doc.attribute(&id("call-btn"), "aria-expanded").as_deref(), Some("true"));
    }

    #[test]
    fn open_without_close_control_focuses_first() {
        let doc = page();
        let mut overlay =
            Overlay::mount(doc.clone(), OverlayConfig::new("modal").with_panel("panel")).unwrap();
        overlay.open();
        assert_eq!(doc.active_element(), Some(id("number")));
    }

    #[test]
    fn hidden_close_control_is_not_preferred() {
        let doc = page();
        doc.set_visible(&id("close"), false);
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        overlay.open();
        assert_eq!(doc.active_element(), Some(id("number")));
    }

    #[test]
    fn open_with_empty_focusable_set_skips_trap() {
        let doc = PageDocument::new();
        doc.register(ElementSpec::focusable("trigger"));
        doc.register(ElementSpec::container("empty"));
        doc.focus(&id("trigger"));

        let mut overlay = Overlay::mount(doc.clone(), OverlayConfig::new("empty")).unwrap();
        assert!(overlay.open());
        assert!(overlay.is_open());
        assert!(!overlay.has_key_trap());
        assert_eq!(doc.key_listener_count(), 0);
        assert_eq!(doc.active_element(), Some(id("trigger")));
        assert_eq!(overlay.handle_key(KeyInput::tab()), KeyOutcome::PassThrough);
    }

    #[test]
    fn open_is_idempotent() {
        let doc = page();
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        doc.set_body_overflow("auto");
        doc.focus(&id("call-btn"));

        assert!(overlay.open());
        assert!(!overlay.open());
        assert_eq!(doc.key_listener_count(), 1);
        assert_eq!(overlay.previously_focused(), Some(&id("call-btn")));

        overlay.close();
        assert_eq!(doc.body_overflow(), "auto");
    }

    #[test]
    fn close_restores_focus_and_scroll() {
        let doc = page();
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        doc.set_body_overflow("scroll");
        doc.focus(&id("call-btn"));

        overlay.open();
        assert!(overlay.close());
        assert!(!overlay.close());
        assert_eq!(doc.active_element(), Some(id("call-btn")));
        assert_eq!(doc.body_overflow(), "scroll");
        assert_eq!(doc.key_listener_count(), 0);
        assert_eq!(doc.attribute(&id("modal"), "aria-hidden").as_deref(), Some("true"));
    }

    #[test]
    fn close_falls_back_when_previous_is_gone() {
        let doc = page();
        doc.register(ElementSpec::focusable("transient"));
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        doc.focus(&id("transient"));

        overlay.open();
        doc.unregister(&id("transient"));
        overlay.close();
        assert_eq!(doc.active_element(), Some(id("call-btn")));
    }

    #[test]
    fn close_without_prior_focus_uses_fallback() {
        let doc = page();
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        overlay.open();
        overlay.close();
        assert_eq!(doc.active_element(), Some(id("call-btn")));
    }

    #[test]
    fn tab_wraps_both_directions() {
        let doc = page();
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        overlay.open();

        doc.focus(&id("copy"));
        assert_eq!(overlay.handle_key(KeyInput::tab()), KeyOutcome::Handled);
        assert_eq!(doc.active_element(), Some(id("number")));

        assert_eq!(overlay.handle_key(KeyInput::shift_tab()), KeyOutcome::Handled);
        assert_eq!(doc.active_element(), Some(id("copy")));
    }

    #[test]
    fn tab_in_middle_passes_through() {
        let doc = page();
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        overlay.open();
        assert_eq!(doc.active_element(), Some(id("close")));
        assert_eq!(overlay.handle_key(KeyInput::tab()), KeyOutcome::PassThrough);
        assert_eq!(overlay.handle_key(KeyInput::shift_tab()), KeyOutcome::PassThrough);
        assert_eq!(overlay.handle_key(KeyInput::other()), KeyOutcome::PassThrough);
    }

    #[test]
    fn tab_pulls_escaped_focus_back() {
        let doc = page();
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        overlay.open();
        doc.note_focus(&id("call-btn"));

        assert_eq!(overlay.handle_key(KeyInput::tab()), KeyOutcome::Handled);
        assert_eq!(doc.active_element(), Some(id("number")));
    }

    #[test]
    fn trapped_tab_steps_through_set() {
        let doc = page();
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        overlay.open();

        assert_eq!(overlay.handle_trapped_key(KeyInput::tab()), KeyOutcome::Handled);
        assert_eq!(doc.active_element(), Some(id("copy")));
        assert_eq!(overlay.handle_trapped_key(KeyInput::shift_tab()), KeyOutcome::Handled);
        assert_eq!(doc.active_element(), Some(id("close")));
        assert_eq!(overlay.handle_trapped_key(KeyInput::other()), KeyOutcome::PassThrough);
    }

    #[test]
    fn trapped_keys_work_after_blur() {
        let doc = page();
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        doc.focus(&id("call-btn"));
        overlay.open();

        // Clicking non-interactive panel text blurs the close button.
        doc.note_blur(&id("close"));
        assert_eq!(doc.active_element(), None);

        assert_eq!(overlay.handle_trapped_key(KeyInput::shift_tab()), KeyOutcome::Handled);
        assert_eq!(doc.active_element(), Some(id("copy")));

        doc.note_blur(&id("copy"));
        assert_eq!(overlay.handle_trapped_key(KeyInput::escape()), KeyOutcome::Handled);
        assert!(!overlay.is_open());
        assert_eq!(doc.active_element(), Some(id("call-btn")));
    }

    #[test]
    fn escape_closes_once() {
        let doc = page();
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        assert_eq!(overlay.handle_key(KeyInput::escape()), KeyOutcome::PassThrough);

        overlay.open();
        assert_eq!(overlay.handle_key(KeyInput::escape()), KeyOutcome::Handled);
        assert!(!overlay.is_open());
        assert_eq!(overlay.handle_key(KeyInput::escape()), KeyOutcome::PassThrough);
    }

    #[test]
    fn backdrop_click_closes_panel_click_does_not() {
        let doc = page();
        let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
        overlay.open();
        assert!(!overlay.handle_click(&id("panel")));
        assert!(overlay.is_open());
        assert!(overlay.handle_click(&id("modal")));
        assert!(!overlay.is_open());
    }

    #[test]
    fn drop_while_open_releases_trap_and_scroll_lock() {
        let doc = page();
        doc.set_body_overflow("visible");
        {
            let mut overlay = Overlay::mount(doc.clone(), config()).unwrap();
            overlay.open();
            assert_eq!(doc.key_listener_count(), 1);
        }
        assert_eq!(doc.key_listener_count(), 0);
        assert_eq!(doc.body_overflow(), "visible");
    }

    #[test]
    fn toggle_flips_state() {
        let doc = page();
        let mut overlay = Overlay::mount(doc, config()).unwrap();
        overlay.toggle();
        assert_eq!(overlay.state(), OverlayState::Open);
        overlay.toggle();
        assert_eq!(overlay.state(), OverlayState::Closed);
    }
}
