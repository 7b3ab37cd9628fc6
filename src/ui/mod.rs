//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`cards`]: The posture, tilt, distance and blink cards
//! - [`common`]: Shared components (header, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Header (common::render_header)           │
//! ├──────────┬──────────┬──────────┬─────────┤
//! │ Posture  │ Head Tilt│ Distance │ Blinks  │
//! │ (cards::render)                          │
//! ├──────────┴──────────┴──────────┴─────────┤
//! │ Status Bar (common::render_status_bar)   │
//! └──────────────────────────────────────────┘
//!    Help overlay rendered on top (common::render_help)
//! ```

pub mod cards;
pub mod common;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;

/// Minimum terminal size for usable display
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;

/// Draw one frame of the dashboard.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        common::render_too_small(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let state = app.dashboard();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Min(5),    // Cards
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, &state, chunks[0]);
    cards::render(frame, app, &state, chunks[1]);
    common::render_status_bar(frame, app, chunks[2]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}
