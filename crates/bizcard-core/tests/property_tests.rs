//! Property-based tests for overlay coordination
//!
//! Drives the call modal and the chat panel with random sequences of user
//! actions and checks focus containment, scroll-lock and focus restoration
//! after every step.

use bizcard_core::overlay::SCROLL_LOCK;
use bizcard_core::{
    call, chat, Document, ElementId, ElementSpec, Key, KeyInput, KeyOutcome, OverlayCoordinator,
    OverlayId, PageDocument,
};
use proptest::prelude::*;

const ORIGINAL_OVERFLOW: &str = "auto";

const OVERLAYS: [OverlayId; 2] = [call::CALL_OVERLAY, chat::CHAT_OVERLAY];

/// Focusable controls outside every overlay.
const PAGE_CONTROLS: [&str; 4] = [call::ID_TRIGGER, "whatsappButton", "emailButton", chat::ID_FAB];

// ============================================================================
// Strategy Generators
// ============================================================================

/// User actions on the page
#[derive(Debug, Clone)]
enum PageOp {
    Open(usize),
    Close(usize),
    Tab,
    ShiftTab,
    Escape,
    OtherKey,
    Backdrop(usize),
    /// Click on non-interactive panel text; the focused control blurs
    PanelClick,
    /// Focus a page control with the mouse while nothing is open
    FocusPage(usize),
}

fn page_op_strategy() -> impl Strategy<Value = PageOp> {
    prop_oneof![
        3 => (0..OVERLAYS.len()).prop_map(PageOp::Open),
        1 => (0..OVERLAYS.len()).prop_map(PageOp::Close),
        4 => Just(PageOp::Tab),
        3 => Just(PageOp::ShiftTab),
        1 => Just(PageOp::Escape),
        1 => Just(PageOp::OtherKey),
        1 => (0..OVERLAYS.len()).prop_map(PageOp::Backdrop),
        1 => Just(PageOp::PanelClick),
        2 => (0..PAGE_CONTROLS.len()).prop_map(PageOp::FocusPage),
    ]
}

fn page_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PageOp>> {
    prop::collection::vec(page_op_strategy(), 0..max_ops)
}

// ============================================================================
// Harness
// ============================================================================

fn card_page() -> PageDocument {
    let doc = PageDocument::new();
    doc.register(ElementSpec::focusable(call::ID_TRIGGER));
    doc.register(ElementSpec::focusable("whatsappButton"));
    doc.register(ElementSpec::focusable("emailButton"));

    doc.register(ElementSpec::container(call::ID_MODAL));
    doc.register(ElementSpec::container(call::ID_PANEL).within(call::ID_MODAL));
    doc.register(ElementSpec::focusable(call::ID_CLOSE).within(call::ID_PANEL));
    doc.register(ElementSpec::focusable(call::ID_COPY).within(call::ID_PANEL));
    doc.register(ElementSpec::focusable(call::ID_DIAL).within(call::ID_PANEL));

    doc.register(ElementSpec::container(chat::ID_ROOT));
    doc.register(ElementSpec::focusable(chat::ID_FAB).within(chat::ID_ROOT));
    doc.register(ElementSpec::container(chat::ID_OVERLAY));
    doc.register(ElementSpec::container(chat::ID_PANEL).within(chat::ID_OVERLAY));
    doc.register(ElementSpec::focusable(chat::ID_CLOSE).within(chat::ID_PANEL));
    doc.register(ElementSpec::focusable(chat::ID_IFRAME).within(chat::ID_PANEL));

    doc.set_body_overflow(ORIGINAL_OVERFLOW);
    doc
}

struct Harness {
    doc: PageDocument,
    overlays: OverlayCoordinator<PageDocument>,
    /// Where focus must land once the page has no open overlay
    expected_restore: Option<ElementId>,
}

impl Harness {
    fn new() -> Self {
        let doc = card_page();
        let mut overlays = OverlayCoordinator::new(doc.clone());
        overlays.register(call::CALL_OVERLAY, call::overlay_config());
        overlays.register(chat::CHAT_OVERLAY, chat::overlay_config());
        Self {
            doc,
            overlays,
            expected_restore: None,
        }
    }

    fn fallback(&self, id: OverlayId) -> Option<ElementId> {
        self.overlays
            .get(id)
            .and_then(|overlay| overlay.config().fallback_focus.clone())
    }

    /// Keydown through the page-wide listener, then native navigation when
    /// nothing suppressed it.
    fn press(&mut self, input: KeyInput) {
        let outcome = self.overlays.dispatch_key(input);
        if outcome == KeyOutcome::PassThrough && input.key == Key::Tab {
            self.doc.sequential_focus(input.shift);
        }
    }

    fn apply(&mut self, op: &PageOp) {
        match op {
            PageOp::Open(i) => {
                let id = OVERLAYS[*i];
                if self.overlays.active().is_none() {
                    self.expected_restore = self.doc.active_element().or_else(|| self.fallback(id));
                }
                self.overlays.open(id);
            }
            PageOp::Close(i) => {
                self.overlays.close(OVERLAYS[*i]);
            }
            PageOp::Tab => self.press(KeyInput::tab()),
            PageOp::ShiftTab => self.press(KeyInput::shift_tab()),
            PageOp::Escape => self.press(KeyInput::escape()),
            PageOp::OtherKey => self.press(KeyInput::other()),
            PageOp::Backdrop(i) => {
                let id = OVERLAYS[*i];
                if let Some(root) = self.overlays.get(id).map(|o| o.config().root.clone()) {
                    self.overlays.handle_click(id, &root);
                }
            }
            PageOp::PanelClick => {
                if self.overlays.active().is_some() {
                    if let Some(focused) = self.doc.active_element() {
                        self.doc.note_blur(&focused);
                    }
                }
            }
            PageOp::FocusPage(i) => {
                if self.overlays.active().is_none() {
                    self.doc.note_focus(&ElementId::from(PAGE_CONTROLS[*i]));
                }
            }
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// At most one overlay is open, and it alone holds the scroll-lock and
    /// the key listener.
    #[test]
    fn single_active_overlay(ops in page_ops_strategy(60)) {
        let mut h = Harness::new();
        for op in &ops {
            h.apply(op);

            let open: Vec<OverlayId> = OVERLAYS
                .iter()
                .copied()
                .filter(|id| h.overlays.is_open(*id))
                .collect();
            prop_assert!(open.len() <= 1);
            prop_assert_eq!(open.first().copied(), h.overlays.active());

            match h.overlays.active() {
                Some(_) => {
                    prop_assert_eq!(h.doc.body_overflow(), SCROLL_LOCK);
                    prop_assert_eq!(h.doc.key_listener_count(), 1);
                }
                None => {
                    prop_assert_eq!(h.doc.body_overflow(), ORIGINAL_OVERFLOW);
                    prop_assert_eq!(h.doc.key_listener_count(), 0);
                }
            }
        }
    }

    /// Tab and Shift+Tab never move focus out of the open overlay's panel.
    #[test]
    fn tab_keeps_focus_inside(ops in page_ops_strategy(60)) {
        let mut h = Harness::new();
        for op in &ops {
            h.apply(op);
            let Some(active) = h.overlays.active() else {
                continue;
            };
            if matches!(op, PageOp::Tab | PageOp::ShiftTab) {
                let focusable = h.overlays.get(active).map(|o| o.focusable()).unwrap_or_default();
                let focused = h.doc.active_element();
                prop_assert!(
                    focused.as_ref().is_some_and(|f| focusable.contains(f)),
                    "focus {:?} escaped {:?}",
                    focused,
                    focusable
                );
            }
        }
    }

    /// Whenever the last overlay closes, focus is back where it was before
    /// the first one opened.
    #[test]
    fn close_restores_prior_focus(ops in page_ops_strategy(60)) {
        let mut h = Harness::new();
        for op in &ops {
            let was_open = h.overlays.active().is_some();
            h.apply(op);
            if was_open && h.overlays.active().is_none() {
                prop_assert_eq!(h.doc.active_element(), h.expected_restore.clone());
            }
        }
    }

    /// Closed overlays stay out of native tab order.
    #[test]
    fn closed_panels_are_not_tabbable(steps in 1..20usize) {
        let h = Harness::new();
        for _ in 0..steps {
            let next = h.doc.sequential_focus(false).expect("page has controls");
            prop_assert!(PAGE_CONTROLS.contains(&next.as_str()));
        }
    }
}
