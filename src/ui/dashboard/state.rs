//! Dashboard state management
//!
//! Contains the dashboard state struct mutated only by the controller loop

use crate::events::Event;
use crate::rows::DisplayRow;
use std::time::Duration;

/// Single-owner dashboard state.
///
/// Rows are replaced wholesale each refresh cycle; the scroll offset is
/// clamped by the controller before every render and never by the renderer.
#[derive(Debug)]
pub struct DashboardState {
    /// The full row sequence derived from the last fetch cycle.
    rows: Vec<DisplayRow>,
    /// Index of the first visible row.
    scroll_offset: usize,
    /// Cleared exactly once, by the quit action or a shutdown broadcast.
    running: bool,
    /// Seconds between scheduled fetches, reported in the footer.
    refresh_interval: Duration,
    /// Outcome of the most recent fetch cycle, shown in the header.
    last_event: Option<Event>,
}

impl DashboardState {
    pub fn new(refresh_interval: Duration) -> Self {
        Self {
            rows: Vec::new(),
            scroll_offset: 0,
            running: true,
            refresh_interval,
            last_event: None,
        }
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Replaces the whole row sequence. Partial updates are not supported;
    /// every fetch cycle owns the complete sequence.
    pub fn replace_rows(&mut self, rows: Vec<DisplayRow>) {
        self.rows = rows;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Moves down unconditionally; the controller clamps before rendering.
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Clamps the offset to `[0, rows - capacity]` so the viewport never
    /// scrolls past the content. Also applied after resizes.
    pub fn clamp_scroll(&mut self, visible_capacity: usize) {
        let max_offset = self.rows.len().saturating_sub(visible_capacity);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// The contiguous slice of rows currently shown.
    pub fn visible_rows(&self, visible_capacity: usize) -> &[DisplayRow] {
        let start = self.scroll_offset.min(self.rows.len());
        let end = (start + visible_capacity).min(self.rows.len());
        &self.rows[start..end]
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    pub fn last_event(&self) -> Option<&Event> {
        self.last_event.as_ref()
    }

    pub fn set_last_event(&mut self, event: Event) {
        self.last_event = Some(event);
    }
}
