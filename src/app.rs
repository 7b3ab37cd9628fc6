//! Application state for the TUI.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::poller::{PollStatus, PollerControl};
use crate::ui::Theme;
use crate::view::{DashboardState, Document};

/// How long a status message stays in the status bar.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub theme: Theme,

    document: Arc<Document>,
    poller: PollerControl,
    source_description: String,
    interval: Duration,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App over a shared document and a running poller.
    pub fn new(
        document: Arc<Document>,
        poller: PollerControl,
        source_description: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self::with_theme(document, poller, source_description, interval, Theme::auto_detect())
    }

    /// Like [`App::new`] with an explicit theme (no terminal detection).
    pub fn with_theme(
        document: Arc<Document>,
        poller: PollerControl,
        source_description: impl Into<String>,
        interval: Duration,
        theme: Theme,
    ) -> Self {
        Self {
            running: true,
            show_help: false,
            theme,
            document,
            poller,
            source_description: source_description.into(),
            interval,
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        &self.source_description
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// What the dashboard currently shows.
    pub fn dashboard(&self) -> DashboardState {
        DashboardState::read(&self.document)
    }

    /// How the feed is doing.
    pub fn poll_status(&self) -> PollStatus {
        self.poller.status()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Poll now instead of waiting for the next tick.
    pub fn refresh(&mut self) {
        self.poller.refresh();
        self.set_status_message("Refreshing...".to_string());
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export what the dashboard currently shows to a JSON file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        write_state(&self.dashboard(), path)
    }
}

/// Write a dashboard state as pretty-printed JSON.
pub fn write_state(state: &DashboardState, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}
