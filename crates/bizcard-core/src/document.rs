//! Page document model
//!
//! Overlays and menus never talk to a concrete UI toolkit. They work against
//! the [`Document`] trait: focus, a handful of attributes, the body
//! scroll-lock style and a count of document-level key listeners.
//!
//! [`PageDocument`] is the in-process implementation. The desktop app keeps
//! it in sync with the rendered page (elements register on mount, `onfocus`
//! handlers report focus changes) and installs a focus sink so that calls to
//! [`Document::focus`] reach the real webview.
//!
//! ## Usage
//!
//! ```ignore
//! let doc = PageDocument::new();
//! doc.register(ElementSpec::container("call-modal"));
//! doc.register(ElementSpec::focusable("call-modal-close").within("call-modal"));
//!
//! doc.focus(&ElementId::from("call-modal-close"));
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

/// Identifier of an element on the page (its DOM `id`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle for a registered document-level key listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// A document key listener coming or going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerChange {
    Added(ListenerId),
    Removed(ListenerId),
}

/// Operations overlays need from the page.
///
/// Implementations are cheap handles: cloning shares the same page, and all
/// methods take `&self`.
pub trait Document: Clone {
    /// Whether the element is currently part of the page.
    fn contains(&self, id: &ElementId) -> bool;

    /// Whether `id` is `ancestor` or one of its descendants.
    fn is_within(&self, id: &ElementId, ancestor: &ElementId) -> bool;

    /// The element holding keyboard focus, if any.
    fn active_element(&self) -> Option<ElementId>;

    /// Move focus to `id`. Returns `false` if the element is gone.
    fn focus(&self, id: &ElementId) -> bool;

    /// Interactive descendants of `root` that are visible and enabled, in
    /// document order.
    fn focusable_within(&self, root: &ElementId) -> Vec<ElementId>;

    /// Show or hide an element (and with it, its descendants).
    fn set_visible(&self, id: &ElementId, visible: bool);

    /// Inline `overflow` style of the body.
    fn body_overflow(&self) -> String;

    fn set_body_overflow(&self, value: &str);

    fn attribute(&self, id: &ElementId, name: &str) -> Option<String>;

    /// Set an attribute. Unknown elements are ignored.
    fn set_attribute(&self, id: &ElementId, name: &str, value: &str);

    fn add_key_listener(&self) -> ListenerId;

    fn remove_key_listener(&self, listener: ListenerId);

    /// Number of installed document-level key listeners.
    fn key_listener_count(&self) -> usize;
}

/// Description of an element registered with [`PageDocument`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementSpec {
    pub id: ElementId,
    pub parent: Option<ElementId>,
    /// Takes part in sequential keyboard navigation
    pub focusable: bool,
    pub disabled: bool,
    pub visible: bool,
}

impl ElementSpec {
    /// A non-interactive element (overlay root, panel, list).
    pub fn container(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            focusable: false,
            disabled: false,
            visible: true,
        }
    }

    /// An interactive element (button, link, iframe, input).
    pub fn focusable(id: impl Into<ElementId>) -> Self {
        Self {
            focusable: true,
            ..Self::container(id)
        }
    }

    pub fn within(mut self, parent: impl Into<ElementId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

type FocusSink = Rc<dyn Fn(&ElementId)>;
type ListenerSink = Rc<dyn Fn(ListenerChange)>;

#[derive(Default)]
struct PageState {
    /// Registration order doubles as document order
    order: Vec<ElementId>,
    elements: HashMap<ElementId, ElementSpec>,
    attributes: HashMap<ElementId, HashMap<String, String>>,
    active: Option<ElementId>,
    body_overflow: String,
    listeners: HashSet<ListenerId>,
    next_listener: u64,
}

impl PageState {
    fn is_within(&self, id: &ElementId, ancestor: &ElementId) -> bool {
        let mut current = Some(id);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self
                .elements
                .get(candidate)
                .and_then(|spec| spec.parent.as_ref());
        }
        false
    }

    /// Visible means the element and all its ancestors are visible.
    fn is_rendered(&self, id: &ElementId) -> bool {
        let mut current = self.elements.get(id);
        while let Some(spec) = current {
            if !spec.visible {
                return false;
            }
            current = spec.parent.as_ref().and_then(|p| self.elements.get(p));
        }
        true
    }

    fn is_tabbable(&self, id: &ElementId) -> bool {
        self.elements
            .get(id)
            .is_some_and(|spec| spec.focusable && !spec.disabled)
            && self.is_rendered(id)
    }
}

/// Shared, single-threaded page model.
#[derive(Clone, Default)]
pub struct PageDocument {
    state: Rc<RefCell<PageState>>,
    focus_sink: Option<FocusSink>,
    listener_sink: Option<ListenerSink>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward every programmatic focus change to `sink` (e.g. a webview).
    pub fn with_focus_sink(mut self, sink: impl Fn(&ElementId) + 'static) -> Self {
        self.focus_sink = Some(Rc::new(sink));
        self
    }

    /// Forward key listener installs and removals to `sink`, so the page can
    /// attach a real listener for exactly as long as the model holds one.
    pub fn with_listener_sink(mut self, sink: impl Fn(ListenerChange) + 'static) -> Self {
        self.listener_sink = Some(Rc::new(sink));
        self
    }

    fn notify_listener(&self, change: ListenerChange) {
        if let Some(sink) = &self.listener_sink {
            sink(change);
        }
    }

    /// Add or replace an element. New elements are appended in document
    /// order; replacing keeps the original position.
    pub fn register(&self, spec: ElementSpec) {
        let mut state = self.state.borrow_mut();
        if !state.elements.contains_key(&spec.id) {
            state.order.push(spec.id.clone());
        }
        state.elements.insert(spec.id.clone(), spec);
    }

    /// Remove an element and everything registered inside it.
    pub fn unregister(&self, id: &ElementId) {
        let mut state = self.state.borrow_mut();
        let removed: Vec<ElementId> = state
            .order
            .iter()
            .filter(|candidate| state.is_within(candidate, id))
            .cloned()
            .collect();
        for gone in &removed {
            state.elements.remove(gone);
            state.attributes.remove(gone);
        }
        state.order.retain(|candidate| !removed.contains(candidate));
        if state.active.as_ref().is_some_and(|a| removed.contains(a)) {
            state.active = None;
        }
    }

    pub fn set_disabled(&self, id: &ElementId, disabled: bool) {
        if let Some(spec) = self.state.borrow_mut().elements.get_mut(id) {
            spec.disabled = disabled;
        }
    }

    /// Record a focus change that happened in the page itself (click, native
    /// tab navigation). Does not call the focus sink.
    pub fn note_focus(&self, id: &ElementId) {
        let mut state = self.state.borrow_mut();
        if state.elements.contains_key(id) {
            state.active = Some(id.clone());
        }
    }

    /// Record that `id` lost focus (`focusout`). A stale report for an
    /// element that no longer holds focus is ignored.
    pub fn note_blur(&self, id: &ElementId) {
        let mut state = self.state.borrow_mut();
        if state.active.as_ref() == Some(id) {
            state.active = None;
        }
    }

    /// Native sequential navigation: the next (or previous) tabbable element
    /// in document order, wrapping around the whole page.
    pub fn sequential_focus(&self, backwards: bool) -> Option<ElementId> {
        let next = {
            let state = self.state.borrow();
            let tabbable: Vec<&ElementId> = state
                .order
                .iter()
                .filter(|id| state.is_tabbable(id))
                .collect();
            if tabbable.is_empty() {
                return None;
            }
            let position = state
                .active
                .as_ref()
                .and_then(|active| tabbable.iter().position(|id| *id == active));
            let index = match (position, backwards) {
                (None, false) => 0,
                (None, true) => tabbable.len() - 1,
                (Some(i), false) => (i + 1) % tabbable.len(),
                (Some(i), true) => (i + tabbable.len() - 1) % tabbable.len(),
            };
            tabbable[index].clone()
        };
        self.note_focus(&next);
        Some(next)
    }
}

impl fmt::Debug for PageDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("PageDocument")
            .field("elements", &state.order.len())
            .field("active", &state.active)
            .field("body_overflow", &state.body_overflow)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl Document for PageDocument {
    fn contains(&self, id: &ElementId) -> bool {
        self.state.borrow().elements.contains_key(id)
    }

    fn is_within(&self, id: &ElementId, ancestor: &ElementId) -> bool {
        let state = self.state.borrow();
        state.elements.contains_key(id) && state.is_within(id, ancestor)
    }

    fn active_element(&self) -> Option<ElementId> {
        self.state.borrow().active.clone()
    }

    fn focus(&self, id: &ElementId) -> bool {
        {
            let mut state = self.state.borrow_mut();
            if !state.elements.contains_key(id) {
                return false;
            }
            state.active = Some(id.clone());
        }
        // Sink runs outside the borrow; it may call back into the document.
        if let Some(sink) = &self.focus_sink {
            sink(id);
        }
        true
    }

    fn focusable_within(&self, root: &ElementId) -> Vec<ElementId> {
        let state = self.state.borrow();
        state
            .order
            .iter()
            .filter(|id| *id != root && state.is_within(id, root) && state.is_tabbable(id))
            .cloned()
            .collect()
    }

    fn set_visible(&self, id: &ElementId, visible: bool) {
        if let Some(spec) = self.state.borrow_mut().elements.get_mut(id) {
            spec.visible = visible;
        }
    }

    fn body_overflow(&self) -> String {
        self.state.borrow().body_overflow.clone()
    }

    fn set_body_overflow(&self, value: &str) {
        self.state.borrow_mut().body_overflow = value.to_string();
    }

    fn attribute(&self, id: &ElementId, name: &str) -> Option<String> {
        self.state
            .borrow()
            .attributes
            .get(id)
            .and_then(|attrs| attrs.get(name))
            .cloned()
    }

    fn set_attribute(&self, id: &ElementId, name: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        if !state.elements.contains_key(id) {
            return;
        }
        state
            .attributes
            .entry(id.clone())
            .or_default()
            .insert(name.to_string(), value.to_string());
    }

    fn add_key_listener(&self) -> ListenerId {
        let listener = {
            let mut state = self.state.borrow_mut();
            state.next_listener += 1;
            let listener = ListenerId(state.next_listener);
            state.listeners.insert(listener);
            listener
        };
        self.notify_listener(ListenerChange::Added(listener));
        listener
    }

    fn remove_key_listener(&self, listener: ListenerId) {
        let removed = self.state.borrow_mut().listeners.remove(&listener);
        if removed {
            self.notify_listener(ListenerChange::Removed(listener));
        }
    }

    fn key_listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sample() -> PageDocument {
        let doc = PageDocument::new();
        doc.register(ElementSpec::focusable("trigger"));
        doc.register(ElementSpec::container("modal"));
        doc.register(ElementSpec::container("panel").within("modal"));
        doc.register(ElementSpec::focusable("close").within("panel"));
        doc.register(ElementSpec::focusable("copy").within("panel"));
        doc.register(ElementSpec::focusable("call").within("panel"));
        doc
    }

    #[test]
    fn focusable_within_keeps_document_order() {
        let doc = sample();
        let ids: Vec<String> = doc
            .focusable_within(&"modal".into())
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, vec!["close", "copy", "call"]);
    }

    #[test]
    fn focusable_within_skips_hidden_and_disabled() {
        let doc = sample();
        doc.set_disabled(&"copy".into(), true);
        doc.set_visible(&"call".into(), false);
        assert_eq!(doc.focusable_within(&"modal".into()), vec![ElementId::from("close")]);
    }

    #[test]
    fn hidden_ancestor_hides_descendants() {
        let doc = sample();
        doc.set_visible(&"panel".into(), false);
        assert!(doc.focusable_within(&"modal".into()).is_empty());
    }

    #[test]
    fn focus_unknown_element_fails() {
        let doc = sample();
        assert!(!doc.focus(&"nope".into()));
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn focus_sink_sees_programmatic_focus_only() {
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        let doc = sample().with_focus_sink(move |_| counter.set(counter.get() + 1));

        doc.focus(&"close".into());
        doc.note_focus(&"copy".into());
        assert_eq!(seen.get(), 1);
        assert_eq!(doc.active_element(), Some(ElementId::from("copy")));
    }

    #[test]
    fn unregister_drops_subtree_and_focus() {
        let doc = sample();
        doc.focus(&"copy".into());
        doc.unregister(&"panel".into());
        assert!(!doc.contains(&"copy".into()));
        assert!(doc.contains(&"modal".into()));
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn attributes_ignore_unknown_elements() {
        let doc = sample();
        doc.set_attribute(&"ghost".into(), "data-open", "true");
        assert_eq!(doc.attribute(&"ghost".into(), "data-open"), None);
        doc.set_attribute(&"modal".into(), "data-open", "true");
        assert_eq!(doc.attribute(&"modal".into(), "data-open").as_deref(), Some("true"));
    }

    #[test]
    fn sequential_focus_wraps_page() {
        let doc = sample();
        doc.focus(&"call".into());
        assert_eq!(doc.sequential_focus(false), Some(ElementId::from("trigger")));
        assert_eq!(doc.sequential_focus(true), Some(ElementId::from("call")));
    }

    #[test]
    fn blur_clears_only_the_focused_element() {
        let doc = sample();
        doc.focus(&"close".into());
        doc.note_blur(&"copy".into());
        assert_eq!(doc.active_element(), Some(ElementId::from("close")));
        doc.note_blur(&"close".into());
        assert_eq!(doc.active_element(), None);
        assert_eq!(doc.sequential_focus(false), Some(ElementId::from("trigger")));
    }

    #[test]
    fn listener_sink_sees_each_install_and_removal_once() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let log = changes.clone();
        let doc = sample().with_listener_sink(move |change| log.borrow_mut().push(change));

        let listener = doc.add_key_listener();
        doc.remove_key_listener(listener);
        doc.remove_key_listener(listener);
        assert_eq!(
            *changes.borrow(),
            vec![ListenerChange::Added(listener), ListenerChange::Removed(listener)]
        );
    }

    #[test]
    fn key_listeners_are_counted() {
        let doc = sample();
        let a = doc.add_key_listener();
        let b = doc.add_key_listener();
        assert_ne!(a, b);
        assert_eq!(doc.key_listener_count(), 2);
        doc.remove_key_listener(a);
        doc.remove_key_listener(a);
        assert_eq!(doc.key_listener_count(), 1);
    }
}
