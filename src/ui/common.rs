//! Common UI components.
//!
//! This module contains the header bar, status bar, and help overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::duration::format_duration;
use crate::view::DashboardState;

/// Render the header bar.
///
/// Displays: overall status indicator, title, data source.
pub fn render_header(frame: &mut Frame, app: &App, state: &DashboardState, area: Rect) {
    let worst = state.worst_class();

    let line = Line::from(vec![
        Span::styled(" ● ", app.theme.status_style(worst)),
        Span::styled("POSTURE WATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::raw(app.source_description().to_string()),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows the temporary status message if there is one, otherwise the
/// age of the last update or the last error.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = app.poll_status();
    let (text, style) = match (&status.last_error, status.last_success) {
        (Some(err), _) => (
            format!(
                " Error: {} ({} consecutive failures) | r:retry ?:help q:quit",
                err, status.consecutive_failures
            ),
            Style::default().fg(app.theme.critical),
        ),
        (None, Some(at)) => (
            format!(
                " Updated {:.1}s ago | every {} | r:refresh e:export ?:help q:quit",
                at.elapsed().as_secs_f64(),
                format_duration(app.interval()),
            ),
            Style::default().add_modifier(Modifier::DIM),
        ),
        (None, None) => (
            " Waiting for first update... | ?:help q:quit".to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ),
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

/// Render a notice when the terminal is too small to draw the cards.
pub fn render_too_small(frame: &mut Frame, area: Rect, min_width: u16, min_height: u16) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}",
        area.width, area.height, min_width, min_height
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(ratatui::style::Color::Yellow));
    let height = 2u16.min(area.height);
    let centered = Rect::new(area.x, area.y + area.height.saturating_sub(height) / 2, area.width, height);
    frame.render_widget(paragraph, centered);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the cards.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  r         Poll now"),
        Line::from("  e         Export to JSON"),
        Line::from("  ?         Toggle help"),
        Line::from("  q / Esc   Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Card colours",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  ■ ", Style::default().fg(app.theme.healthy)),
            Span::raw("Good"),
        ]),
        Line::from(vec![
            Span::styled("  ■ ", Style::default().fg(app.theme.critical)),
            Span::raw("Warning"),
        ]),
        Line::from(vec![
            Span::styled("  ■ ", Style::default().fg(app.theme.border)),
            Span::raw("Anything else"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 36u16.min(area.width.saturating_sub(4));
    let help_height = 15u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
