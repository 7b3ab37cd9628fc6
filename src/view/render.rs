//! Applying snapshots to bound elements.

use std::sync::Arc;

use tracing::trace;

use super::bindings::{StatusBinding, ViewBindings};
use super::document::{Element, ElementHandle};
use crate::data::StatusClass;
use crate::source::StatusSnapshot;

/// Show `status` in `text` and restyle `card` to match.
///
/// If either element is missing (never bound, or since removed from its
/// document) nothing happens. Otherwise the text becomes `status` verbatim
/// (empty when absent), all status classes are cleared from the card, and
/// at most one is applied: `status-good` for `"Good"`, `status-bad` for
/// `"Warning"`. Other classes on the card are left alone.
pub fn update_status(
    text: Option<&ElementHandle>,
    card: Option<&ElementHandle>,
    status: Option<&str>,
) {
    let text = text.and_then(ElementHandle::upgrade);
    let card = card.and_then(ElementHandle::upgrade);
    let (Some(text), Some(card)) = (text, card) else {
        return;
    };

    if Arc::ptr_eq(&text, &card) {
        let mut element = text.write();
        element.set_text(status.unwrap_or_default());
        restyle(&mut element, status);
        return;
    }

    // Both guards are held for the whole update, text before card, so a
    // reader locking in the same order sees either all of it or none.
    let mut text = text.write();
    let mut card = card.write();
    text.set_text(status.unwrap_or_default());
    restyle(&mut card, status);
}

fn restyle(card: &mut Element, status: Option<&str>) {
    for class in StatusClass::ALL {
        card.remove_class(class.css_class());
    }
    if let Some(class) = StatusClass::for_status(status) {
        card.add_class(class.css_class());
    }
}

fn update_binding(binding: &StatusBinding, status: Option<&str>) {
    update_status(binding.text.as_ref(), binding.card.as_ref(), status);
}

/// Apply a whole snapshot: the three status cards, then the blink counter.
pub fn apply_snapshot(bindings: &ViewBindings, snapshot: &StatusSnapshot) {
    update_binding(&bindings.posture, snapshot.posture.as_deref());
    update_binding(&bindings.tilt, snapshot.tilt.as_deref());
    update_binding(&bindings.distance, snapshot.distance.as_deref());

    if let Some(blink) = &bindings.blink {
        let text = snapshot.blink_text();
        trace!(blink = %text, "Updating blink counter");
        blink.update(|e| e.set_text(text));
    }
}
