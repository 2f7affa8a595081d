//! Page-wide overlay coordination.
//!
//! Overlays share two global resources: keyboard focus and the body
//! scroll-lock. The [`OverlayCoordinator`] owns every overlay on the page and
//! keeps at most one of them open: opening an overlay first closes the one
//! that is currently active, so scroll-lock and focus restoration never
//! interleave.

use std::collections::HashMap;
use std::fmt;

use crate::document::{Document, ElementId};
use crate::overlay::{KeyInput, KeyOutcome, Overlay, OverlayConfig};

/// Stable name of an overlay on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayId(&'static str);

impl OverlayId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Registry holding at most one active overlay.
pub struct OverlayCoordinator<D: Document> {
    doc: D,
    overlays: HashMap<OverlayId, Overlay<D>>,
    active: Option<OverlayId>,
}

impl<D: Document> OverlayCoordinator<D> {
    pub fn new(doc: D) -> Self {
        Self {
            doc,
            overlays: HashMap::new(),
            active: None,
        }
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    /// Bind an overlay under `id`, replacing any previous registration.
    ///
    /// Returns `false` when the markup is missing; the overlay then stays
    /// unregistered and every entry point for it is a no-op.
    pub fn register(&mut self, id: OverlayId, config: OverlayConfig) -> bool {
        self.unregister(id);
        match Overlay::mount(self.doc.clone(), config) {
            Ok(overlay) => {
                tracing::debug!(overlay = %id, "overlay registered");
                self.overlays.insert(id, overlay);
                true
            }
            Err(e) => {
                tracing::warn!(overlay = %id, "overlay disabled: {}", e);
                false
            }
        }
    }

    /// Remove an overlay. An open overlay is closed on the way out.
    pub fn unregister(&mut self, id: OverlayId) -> bool {
        let Some(mut overlay) = self.overlays.remove(&id) else {
            return false;
        };
        overlay.close();
        if self.active == Some(id) {
            self.active = None;
        }
        true
    }

    pub fn is_registered(&self, id: OverlayId) -> bool {
        self.overlays.contains_key(&id)
    }

    pub fn get(&self, id: OverlayId) -> Option<&Overlay<D>> {
        self.overlays.get(&id)
    }

    /// Currently open overlay, if any.
    pub fn active(&self) -> Option<OverlayId> {
        self.active
    }

    pub fn is_open(&self, id: OverlayId) -> bool {
        self.overlays.get(&id).is_some_and(Overlay::is_open)
    }

    /// Open `id`, closing whichever other overlay is active first.
    pub fn open(&mut self, id: OverlayId) -> bool {
        if !self.overlays.contains_key(&id) {
            tracing::debug!(overlay = %id, "open ignored, overlay not registered");
            return false;
        }
        if let Some(current) = self.active.filter(|current| *current != id) {
            self.close(current);
        }
        let Some(overlay) = self.overlays.get_mut(&id) else {
            return false;
        };
        let opened = overlay.open();
        if overlay.is_open() {
            self.active = Some(id);
        }
        opened
    }

    pub fn close(&mut self, id: OverlayId) -> bool {
        let Some(overlay) = self.overlays.get_mut(&id) else {
            return false;
        };
        let closed = overlay.close();
        if self.active == Some(id) {
            self.active = None;
        }
        closed
    }

    pub fn toggle(&mut self, id: OverlayId) -> bool {
        if self.is_open(id) {
            self.close(id)
        } else {
            self.open(id)
        }
    }

    pub fn close_active(&mut self) -> bool {
        match self.active {
            Some(id) => self.close(id),
            None => false,
        }
    }

    /// Whether the active overlay holds a key trap.
    pub fn is_trapping(&self) -> bool {
        self.active
            .and_then(|id| self.overlays.get(&id))
            .is_some_and(Overlay::has_key_trap)
    }

    /// Route a document keydown to the active overlay.
    pub fn handle_key(&mut self, input: KeyInput) -> KeyOutcome {
        self.route_key(input, false)
    }

    /// Route a keydown from the page-wide listener. While the active overlay
    /// traps focus the page has already suppressed the key's default action,
    /// so every Tab is resolved here.
    pub fn dispatch_key(&mut self, input: KeyInput) -> KeyOutcome {
        let trapped = self.is_trapping();
        self.route_key(input, trapped)
    }

    fn route_key(&mut self, input: KeyInput, trapped: bool) -> KeyOutcome {
        let Some(id) = self.active else {
            return KeyOutcome::PassThrough;
        };
        let Some(overlay) = self.overlays.get_mut(&id) else {
            return KeyOutcome::PassThrough;
        };
        let outcome = if trapped {
            overlay.handle_trapped_key(input)
        } else {
            overlay.handle_key(input)
        };
        if !overlay.is_open() {
            self.active = None;
        }
        outcome
    }

    /// Route a click on an overlay's markup.
    pub fn handle_click(&mut self, id: OverlayId, target: &ElementId) -> bool {
        let Some(overlay) = self.overlays.get_mut(&id) else {
            return false;
        };
        let closed = overlay.handle_click(target);
        if closed && self.active == Some(id) {
            self.active = None;
        }
        closed
    }
}

impl<D: Document> Drop for OverlayCoordinator<D> {
    fn drop(&mut self) {
        // Close the active overlay before the others drop in arbitrary order.
        self.close_active();
    }
}
