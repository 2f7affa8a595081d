//! Collapsible social menu for narrow screens.
//!
//! A disclosure widget: a toggle button controls a strip of links. Unlike an
//! [`Overlay`](crate::overlay::Overlay) it does not trap focus or lock
//! scrolling; it only moves focus into the strip on open and closes on
//! Escape or on a click anywhere outside the toggle and the strip.

use crate::document::{Document, ElementId};
use crate::overlay::{Key, KeyInput, KeyOutcome};

pub const ID_TOGGLE: &str = "mobile-social-toggle";
pub const ID_STRIP: &str = "social-strip";

pub struct Disclosure<D: Document> {
    doc: D,
    toggle: ElementId,
    content: ElementId,
    open: bool,
}

impl<D: Document> Disclosure<D> {
    /// `None` when either element is missing from the page.
    pub fn mount(doc: D, toggle: impl Into<ElementId>, content: impl Into<ElementId>) -> Option<Self> {
        let toggle = toggle.into();
        let content = content.into();
        if !doc.contains(&toggle) || !doc.contains(&content) {
            tracing::debug!(%toggle, %content, "disclosure markup missing");
            return None;
        }
        let disclosure = Self {
            doc,
            toggle,
            content,
            open: false,
        };
        disclosure.publish_state();
        Some(disclosure)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.publish_state();
        if let Some(first) = self.doc.focusable_within(&self.content).first() {
            self.doc.focus(first);
        }
        true
    }

    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.publish_state();
        true
    }

    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }

    pub fn handle_key(&mut self, input: KeyInput) -> KeyOutcome {
        if self.open && input.key == Key::Escape {
            self.close();
            return KeyOutcome::Handled;
        }
        KeyOutcome::PassThrough
    }

    /// Document click. `None` target means a click on the page background.
    pub fn handle_document_click(&mut self, target: Option<&ElementId>) -> bool {
        if !self.open {
            return false;
        }
        let inside = target.is_some_and(|t| {
            self.doc.is_within(t, &self.toggle) || self.doc.is_within(t, &self.content)
        });
        if inside {
            return false;
        }
        self.close()
    }

    fn publish_state(&self) {
        let value = if self.open { "true" } else { "false" };
        self.doc.set_visible(&self.content, self.open);
        self.doc.set_attribute(&self.toggle, "aria-expanded", value);
        self.doc.set_attribute(&self.content, "data-open", value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ElementSpec, PageDocument};

    fn page() -> PageDocument {
        let doc = PageDocument::new();
        doc.register(ElementSpec::focusable(ID_TOGGLE));
        doc.register(ElementSpec::container(ID_STRIP));
        doc.register(ElementSpec::focusable("facebook").within(ID_STRIP));
        doc.register(ElementSpec::focusable("instagram").within(ID_STRIP));
        doc.register(ElementSpec::focusable("elsewhere"));
        doc
    }

    #[test]
    fn missing_markup_disables() {
        assert!(Disclosure::mount(PageDocument::new(), ID_TOGGLE, ID_STRIP).is_none());
    }

    #[test]
    fn open_focuses_first_link() {
        let doc = page();
        let mut menu = Disclosure::mount(doc.clone(), ID_TOGGLE, ID_STRIP).unwrap();
        assert_eq!(doc.attribute(&ID_TOGGLE.into(), "aria-expanded").as_deref(), Some("false"));

        assert!(menu.toggle());
        assert!(menu.is_open());
        assert_eq!(doc.active_element(), Some(ElementId::from("facebook")));
        assert_eq!(doc.attribute(&ID_TOGGLE.into(), "aria-expanded").as_deref(), Some("true"));
    }

    #[test]
    fn escape_closes() {
        let doc = page();
        let mut menu = Disclosure::mount(doc, ID_TOGGLE, ID_STRIP).unwrap();
        assert_eq!(menu.handle_key(KeyInput::escape()), KeyOutcome::PassThrough);
        menu.open();
        assert_eq!(menu.handle_key(KeyInput::escape()), KeyOutcome::Handled);
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_closes_inside_click_does_not() {
        let doc = page();
        let mut menu = Disclosure::mount(doc, ID_TOGGLE, ID_STRIP).unwrap();
        menu.open();
        assert!(!menu.handle_document_click(Some(&"instagram".into())));
        assert!(!menu.handle_document_click(Some(&ID_TOGGLE.into())));
        assert!(menu.is_open());
        assert!(menu.handle_document_click(Some(&"elsewhere".into())));
        assert!(!menu.is_open());

        menu.open();
        assert!(menu.handle_document_click(None));
    }
}
