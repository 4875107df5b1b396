//! Dashboard main renderer

use super::components::{footer, header, table};
use super::state::DashboardState;
use crate::consts::cli_consts::{FOOTER_HEIGHT, HEADER_HEIGHT};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

/// Number of table rows a terminal of the given height can show.
pub fn body_capacity(terminal_height: u16) -> usize {
    terminal_height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT) as usize
}

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    table::render_table(f, main_chunks[1], state);
    footer::render_footer(f, main_chunks[2], state);
}
