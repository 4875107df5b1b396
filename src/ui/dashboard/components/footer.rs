//! Dashboard footer component
//!
//! Renders the row count, key legend and refresh interval

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer_text = format!(
        "{} rows | [Q] Quit  [R] Refresh  [\u{2191}/\u{2193}] Scroll | every {}s",
        state.rows().len(),
        state.refresh_interval().as_secs()
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(footer, area);
}
