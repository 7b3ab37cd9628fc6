//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::StatusClass;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for `status-warn` cards.
    pub warning: Color,
    /// Color for `status-bad` cards.
    pub critical: Color,
    /// Color for `status-good` cards.
    pub healthy: Color,
    /// Color for cards with no status class.
    pub border: Color,
    /// Style for titles and headings.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            warning: Color::Yellow,
            critical: Color::Red,
            healthy: Color::Green,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            warning: Color::Yellow,
            critical: Color::Red,
            healthy: Color::Green,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Color for a card in the given state.
    pub fn status_color(&self, class: Option<StatusClass>) -> Color {
        match class {
            Some(StatusClass::Good) => self.healthy,
            Some(StatusClass::Warn) => self.warning,
            Some(StatusClass::Bad) => self.critical,
            None => self.border,
        }
    }

    /// Get style for a card's status text
    pub fn status_style(&self, class: Option<StatusClass>) -> Style {
        let style = Style::default().fg(self.status_color(class));
        match class {
            Some(StatusClass::Bad) => style.add_modifier(Modifier::BOLD),
            _ => style,
        }
    }
}
