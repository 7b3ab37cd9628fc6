//! The display surface the poller writes into.
//!
//! A [`Document`] owns a set of elements addressed by id, each with text
//! and a class list. [`ViewBindings`] resolves the dashboard's fixed ids
//! once and is handed to the poller, which only ever writes through it.
//!
//! ```text
//! StatusSnapshot ──▶ apply_snapshot(&ViewBindings) ──▶ Document elements
//!                                                            │
//!                                   DashboardState::read ◀───┘ (TUI, export)
//! ```

mod bindings;
mod document;
mod render;
mod state;

pub use bindings::{Card, StatusBinding, ViewBindings, BLINK_STATUS_ID};
pub use document::{Document, Element, ElementHandle, CARD_CLASS};
pub use render::{apply_snapshot, update_status};
pub use state::{CardState, DashboardState};
