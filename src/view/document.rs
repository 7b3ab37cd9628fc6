//! An addressable tree of display elements.
//!
//! The document owns its elements. Everything else (bindings, the poller)
//! holds [`ElementHandle`]s, which are weak: an element removed from the
//! document simply stops accepting updates.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use serde::Serialize;

use super::bindings::{Card, BLINK_STATUS_ID};

/// Class every status card carries regardless of its state.
pub const CARD_CLASS: &str = "card";

/// A single element: an id, its text, and its class list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    id: String,
    text: String,
    classes: BTreeSet<String>,
}

impl Element {
    /// Create an empty element.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The element's classes, in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Add a class. Adding a class twice is a no-op.
    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }
}

/// Non-owning reference to an element in a [`Document`].
#[derive(Debug, Clone)]
pub struct ElementHandle(Weak<RwLock<Element>>);

impl ElementHandle {
    /// Whether the element is still part of its document.
    pub fn is_attached(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Run `f` against the element, if it still exists.
    pub fn update<R>(&self, f: impl FnOnce(&mut Element) -> R) -> Option<R> {
        let element = self.0.upgrade()?;
        let mut guard = element.write();
        Some(f(&mut guard))
    }

    pub(crate) fn upgrade(&self) -> Option<Arc<RwLock<Element>>> {
        self.0.upgrade()
    }
}

/// The set of elements the dashboard displays, keyed by id.
#[derive(Debug, Default)]
pub struct Document {
    elements: BTreeMap<String, Arc<RwLock<Element>>>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the standard dashboard: three status cards and the blink counter.
    ///
    /// Status texts start as `"-"`, the blink counter as `"0"`.
    pub fn dashboard() -> Self {
        let mut doc = Self::new();
        for card in Card::ALL {
            doc.insert(card.status_id()).update(|e| e.set_text("-"));
            doc.insert(card.card_id()).update(|e| e.add_class(CARD_CLASS));
        }
        doc.insert(BLINK_STATUS_ID).update(|e| e.set_text("0"));
        doc
    }

    /// Insert an empty element, replacing any element with the same id.
    ///
    /// Handles to a replaced element detach.
    pub fn insert(&mut self, id: &str) -> ElementHandle {
        let element = Arc::new(RwLock::new(Element::new(id)));
        let handle = ElementHandle(Arc::downgrade(&element));
        self.elements.insert(id.to_string(), element);
        handle
    }

    /// Remove an element, returning its final state.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id).map(|e| e.read().clone())
    }

    /// Look up an element by id.
    pub fn get_element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.elements.get(id).map(|e| ElementHandle(Arc::downgrade(e)))
    }

    /// A copy of the element's current state.
    pub fn element(&self, id: &str) -> Option<Element> {
        self.elements.get(id).map(|e| e.read().clone())
    }

    /// Copies of two elements taken together.
    ///
    /// `first` is locked before `second` and both stay locked until the
    /// copies are made, matching the order [`update_status`] writes in.
    ///
    /// [`update_status`]: crate::view::update_status
    pub fn element_pair(&self, first: &str, second: &str) -> (Option<Element>, Option<Element>) {
        if first == second {
            let element = self.element(first);
            return (element.clone(), element);
        }
        let first = self.elements.get(first).map(|e| e.read());
        let second = self.elements.get(second).map(|e| e.read());
        (first.as_deref().cloned(), second.as_deref().cloned())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
