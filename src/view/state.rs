//! Read-only view of what the dashboard currently displays.

use std::fmt;

use serde::Serialize;

use super::bindings::{Card, BLINK_STATUS_ID};
use super::document::Document;
use crate::data::StatusClass;

/// What one status card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardState {
    pub card: Card,
    pub title: &'static str,
    /// The status text, or `None` if the text element is missing.
    pub text: Option<String>,
    /// The status class on the card element, if any.
    pub class: Option<StatusClass>,
    /// Whether both elements for this card exist.
    pub present: bool,
}

/// What the whole dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    pub cards: Vec<CardState>,
    /// The blink counter text, or `None` if the element is missing.
    pub blink: Option<String>,
}

impl DashboardState {
    /// Read the current state out of `document`.
    pub fn read(document: &Document) -> Self {
        let cards = Card::ALL
            .into_iter()
            .map(|card| {
                let (text, container) = document.element_pair(card.status_id(), card.card_id());
                let class = container
                    .as_ref()
                    .and_then(|e| e.classes().find_map(StatusClass::from_css_class));
                CardState {
                    card,
                    title: card.title(),
                    present: text.is_some() && container.is_some(),
                    text: text.map(|e| e.text().to_string()),
                    class,
                }
            })
            .collect();

        Self {
            cards,
            blink: document.element(BLINK_STATUS_ID).map(|e| e.text().to_string()),
        }
    }

    pub fn card(&self, card: Card) -> Option<&CardState> {
        self.cards.iter().find(|c| c.card == card)
    }

    /// The most severe class across the cards, for an overall indicator.
    pub fn worst_class(&self) -> Option<StatusClass> {
        self.cards.iter().filter_map(|c| c.class).max()
    }
}

impl fmt::Display for DashboardState {
    /// One line, e.g. `posture=Good tilt=Warning distance=Good blink=3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            let key = match card.card {
                Card::Posture => "posture",
                Card::Tilt => "tilt",
                Card::Distance => "distance",
            };
            write!(f, "{}={} ", key, card.text.as_deref().unwrap_or("-"))?;
        }
        write!(f, "blink={}", self.blink.as_deref().unwrap_or("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StatusSnapshot;
    use crate::view::{apply_snapshot, update_status, ViewBindings};

    #[test]
    fn test_read_initial_dashboard() {
        let doc = Document::dashboard();
        let state = DashboardState::read(&doc);

        assert_eq!(state.cards.len(), 3);
        assert!(state.cards.iter().all(|c| c.present && c.class.is_none()));
        assert_eq!(state.blink.as_deref(), Some("0"));
        assert_eq!(state.worst_class(), None);
    }

    #[test]
    fn test_read_after_update() {
        let doc = Document::dashboard();
        let bindings = ViewBindings::resolve(&doc);
        apply_snapshot(
            &bindings,
            &StatusSnapshot {
                posture: Some("Good".to_string()),
                tilt: Some("Warning".to_string()),
                distance: Some("Unknown".to_string()),
                blink: Some(serde_json::json!("9")),
            },
        );

        let state = DashboardState::read(&doc);
        assert_eq!(state.card(Card::Posture).unwrap().class, Some(StatusClass::Good));
        assert_eq!(state.card(Card::Tilt).unwrap().class, Some(StatusClass::Bad));
        assert_eq!(state.card(Card::Distance).unwrap().class, None);
        assert_eq!(state.worst_class(), Some(StatusClass::Bad));
        assert_eq!(
            state.to_string(),
            "posture=Good tilt=Warning distance=Unknown blink=9"
        );
    }

    #[test]
    fn test_read_missing_elements() {
        let mut doc = Document::dashboard();
        doc.remove("distance-card");
        doc.remove("blink-status");

        let state = DashboardState::read(&doc);
        let distance = state.card(Card::Distance).unwrap();
        assert!(!distance.present);
        assert_eq!(distance.text.as_deref(), Some("-"));
        assert_eq!(state.blink, None);
    }

    #[test]
    fn test_concurrent_reads_see_whole_updates() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let doc = Document::dashboard();
        let bindings = ViewBindings::resolve(&doc);
        let done = AtomicBool::new(false);

        std::thread::scope(|s| {
            s.spawn(|| {
                for i in 0..20_000 {
                    let status = if i % 2 == 0 { "Good" } else { "Warning" };
                    let posture = bindings.card(Card::Posture);
                    update_status(posture.text.as_ref(), posture.card.as_ref(), Some(status));
                }
                done.store(true, Ordering::SeqCst);
            });

            while !done.load(Ordering::SeqCst) {
                let state = DashboardState::read(&doc);
                let posture = state.card(Card::Posture).unwrap();
                assert_eq!(
                    posture.class,
                    StatusClass::for_status(posture.text.as_deref()),
                    "text {:?} shown with class {:?}",
                    posture.text,
                    posture.class
                );
            }
        });
    }

    #[test]
    fn test_serializes_to_json() {
        let state = DashboardState::read(&Document::dashboard());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["cards"][0]["card"], "posture");
        assert_eq!(json["cards"][1]["title"], "Head Tilt");
        assert_eq!(json["blink"], "0");
    }
}
