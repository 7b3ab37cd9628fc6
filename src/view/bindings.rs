//! The fixed element ids the dashboard binds to.

use serde::Serialize;

use super::document::{Document, ElementHandle};

/// Id of the standalone blink counter text.
pub const BLINK_STATUS_ID: &str = "blink-status";

/// One of the three status cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Card {
    Posture,
    Tilt,
    Distance,
}

impl Card {
    pub const ALL: [Card; 3] = [Card::Posture, Card::Tilt, Card::Distance];

    /// Id of the element holding the status text.
    pub fn status_id(self) -> &'static str {
        match self {
            Card::Posture => "posture-status",
            Card::Tilt => "tilt-status",
            Card::Distance => "distance-status",
        }
    }

    /// Id of the container the status class goes on.
    pub fn card_id(self) -> &'static str {
        match self {
            Card::Posture => "posture-card",
            Card::Tilt => "tilt-card",
            Card::Distance => "distance-card",
        }
    }

    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            Card::Posture => "Posture",
            Card::Tilt => "Head Tilt",
            Card::Distance => "Distance",
        }
    }
}

/// A text element paired with the card it styles.
///
/// Either side may be missing; updates then do nothing.
#[derive(Debug, Clone, Default)]
pub struct StatusBinding {
    pub text: Option<ElementHandle>,
    pub card: Option<ElementHandle>,
}

/// Everything the poller writes to, resolved once up front.
#[derive(Debug, Clone, Default)]
pub struct ViewBindings {
    pub posture: StatusBinding,
    pub tilt: StatusBinding,
    pub distance: StatusBinding,
    pub blink: Option<ElementHandle>,
}

impl ViewBindings {
    /// Resolve every binding against `document`. Missing ids are left unbound.
    pub fn resolve(document: &Document) -> Self {
        let bind = |card: Card| StatusBinding {
            text: document.get_element_by_id(card.status_id()),
            card: document.get_element_by_id(card.card_id()),
        };
        Self {
            posture: bind(Card::Posture),
            tilt: bind(Card::Tilt),
            distance: bind(Card::Distance),
            blink: document.get_element_by_id(BLINK_STATUS_ID),
        }
    }

    pub fn card(&self, card: Card) -> &StatusBinding {
        match card {
            Card::Posture => &self.posture,
            Card::Tilt => &self.tilt,
            Card::Distance => &self.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_dashboard() {
        let doc = Document::dashboard();
        let bindings = ViewBindings::resolve(&doc);
        for card in Card::ALL {
            assert!(bindings.card(card).text.is_some());
            assert!(bindings.card(card).card.is_some());
        }
        assert!(bindings.blink.is_some());
    }

    #[test]
    fn test_resolve_partial_document() {
        let mut doc = Document::new();
        doc.insert("tilt-status");
        doc.insert("tilt-card");
        doc.insert("posture-status");

        let bindings = ViewBindings::resolve(&doc);
        assert!(bindings.tilt.text.is_some() && bindings.tilt.card.is_some());
        assert!(bindings.posture.text.is_some());
        assert!(bindings.posture.card.is_none());
        assert!(bindings.distance.text.is_none());
        assert!(bindings.blink.is_none());
    }
}
