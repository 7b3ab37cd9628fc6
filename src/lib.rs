//! # posture-watch
//!
//! A terminal dashboard and library for a posture monitor's status feed.
//!
//! The monitor serves its latest analysis as JSON on `GET /data`
//! (posture, head tilt, screen distance and a blink count). This crate
//! polls that endpoint once per second and reflects each response into a
//! small document of display elements, which the TUI draws as status cards.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐   ┌─────────┐   ┌──────────┐   ┌─────────────┐  │
//! │  │ source  │──▶│ poller  │──▶│   view   │──▶│ app + ui    │  │
//! │  │ (fetch) │   │ (timer) │   │(document)│   │ (terminal)  │  │
//! │  └─────────┘   └─────────┘   └──────────┘   └─────────────┘  │
//! │  HttpSource | FileSource | ChannelSource                     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: the [`SnapshotSource`] trait and its HTTP, file and channel implementations
//! - **[`poller`]**: the owned, cancellable poll loop ([`Poller`], [`PollerHandle`])
//! - **[`view`]**: the [`Document`] of elements, [`ViewBindings`], and [`update_status`]
//! - **[`app`]** / **[`ui`]**: TUI state and ratatui rendering
//! - **[`config`]**: layered [`Settings`]
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Watch a posture monitor on its default port
//! posture-watch --endpoint http://127.0.0.1:5000
//!
//! # Print one line per update instead of drawing the TUI
//! posture-watch --headless
//! ```
//!
//! ### As a library
//!
//! ```
//! use std::sync::Arc;
//! use posture_watch::{ChannelSource, Document, Poller, StatusSnapshot, ViewBindings};
//!
//! # tokio_test::block_on(async {
//! let document = Arc::new(Document::dashboard());
//! let (tx, source) = ChannelSource::create("example");
//! tx.send(StatusSnapshot { posture: Some("Good".into()), ..Default::default() }).unwrap();
//!
//! let mut poller = Poller::new(Box::new(source), ViewBindings::resolve(&document));
//! poller.poll_once().await.unwrap();
//!
//! let card = document.element("posture-card").unwrap();
//! assert!(card.has_class("status-good"));
//! # });
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod poller;
pub mod source;
pub mod ui;
pub mod view;

// Re-export main types for convenience
pub use app::App;
pub use config::Settings;
pub use data::StatusClass;
pub use error::PollError;
pub use poller::{PollStatus, Poller, PollerControl, PollerHandle, DEFAULT_INTERVAL};
pub use source::{ChannelSource, FileSource, HttpSource, SnapshotSource, StatusSnapshot};
pub use view::{
    apply_snapshot, update_status, Card, DashboardState, Document, ElementHandle, ViewBindings,
};
