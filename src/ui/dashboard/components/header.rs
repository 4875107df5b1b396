//! Dashboard header component
//!
//! Renders the title bar, the latest fetch status, and the column labels

use super::super::state::DashboardState;
use super::table::column_headings;
use crate::events::EventType;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Fixed status color per event type.
fn event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Success => Color::Green,
        EventType::Error => Color::Red,
        EventType::Refresh => Color::Yellow,
    }
}

pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let version = env!("CARGO_PKG_VERSION");

    let mut title_spans = vec![Span::styled(
        format!("QUOTEWATCH v{version}"),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(event) = state.last_event().filter(|e| e.should_display()) {
        title_spans.push(Span::raw("  "));
        title_spans.push(Span::styled(
            format!("[{}] {}", event.timestamp, event.msg),
            Style::default().fg(event_color(event.event_type)),
        ));
    }

    let lines = vec![
        Line::from(title_spans),
        Line::styled(
            column_headings(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(header, area);
}
