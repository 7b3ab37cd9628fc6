//! Status card rendering.
//!
//! Draws the three status cards and the blink counter side by side.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::view::{CardState, DashboardState};

/// Render all four cards into `area`.
pub fn render(frame: &mut Frame, app: &App, state: &DashboardState, area: Rect) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for (card, column) in state.cards.iter().zip(columns.iter()) {
        render_card(frame, app, card, *column);
    }
    render_blink(frame, app, state.blink.as_deref(), columns[3]);
}

fn card_block<'a>(app: &App, title: &'a str, style: Style) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(app.theme.header)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(style)
}

/// Pad `lines` with blank lines so they sit in the middle of `area`.
fn centered(mut lines: Vec<Line<'static>>, area: Rect) -> Vec<Line<'static>> {
    let inner_height = area.height.saturating_sub(2) as usize;
    let pad = inner_height.saturating_sub(lines.len()) / 2;
    let mut out = vec![Line::from(""); pad];
    out.append(&mut lines);
    out
}

fn render_card(frame: &mut Frame, app: &App, card: &CardState, area: Rect) {
    let color = app.theme.status_color(card.class);
    let block = card_block(app, card.title, Style::default().fg(color));

    let lines = if card.present {
        let label = card.class.map(|c| c.css_class()).unwrap_or("neutral");
        vec![
            Line::from(Span::styled(
                card.text.clone().unwrap_or_default(),
                app.theme.status_style(card.class).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                label,
                Style::default().add_modifier(Modifier::DIM),
            )),
        ]
    } else {
        vec![Line::from(Span::styled(
            "not on page",
            Style::default().add_modifier(Modifier::DIM),
        ))]
    };

    let paragraph = Paragraph::new(centered(lines, area))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_blink(frame: &mut Frame, app: &App, blink: Option<&str>, area: Rect) {
    let block = card_block(app, "Blinks", Style::default().fg(app.theme.highlight));

    let line = match blink {
        Some(text) => Line::from(Span::styled(
            text.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "not on page",
            Style::default().add_modifier(Modifier::DIM),
        )),
    };

    let paragraph = Paragraph::new(centered(vec![line], area))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
