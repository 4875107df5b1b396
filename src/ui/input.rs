//! Input/timer multiplexing
//!
//! Waits for whichever comes first: a mapped key event, a resize
//! notification, the refresh deadline, or a shutdown broadcast. Exactly one
//! action is returned per call; unmapped events are skipped and later events
//! stay queued in the crossterm stream.

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::broadcast;

/// One discrete step for the dashboard controller to apply.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    Quit,
    Refresh,
    ScrollUp,
    ScrollDown,
    Resize,
    Timeout,
}

pub struct InputMultiplexer {
    events: EventStream,
    shutdown: broadcast::Receiver<()>,
}

impl InputMultiplexer {
    pub fn new(shutdown: broadcast::Receiver<()>) -> Self {
        Self {
            events: EventStream::new(),
            shutdown,
        }
    }

    /// Blocks until a key arrives, the terminal resizes, the timeout elapses,
    /// or shutdown is broadcast. The deadline is fixed up front, so skipped
    /// events do not extend the wait.
    pub async fn next_action(&mut self, timeout: Duration) -> Action {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            tokio::select! {
                _ = self.shutdown.recv() => return Action::Quit,
                _ = tokio::time::sleep_until(deadline) => return Action::Timeout,
                event = self.events.next() => match event {
                    Some(Ok(event)) => {
                        if let Some(action) = map_event(event) {
                            return action;
                        }
                    }
                    // The event stream only ends when the terminal is gone.
                    Some(Err(_)) | None => return Action::Quit,
                },
            }
        }
    }
}

pub fn map_event(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Resize(_, _) => Some(Action::Resize),
        _ => None,
    }
}

pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Skip events that are not key presses (Windows sends both Press and Release)
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Refresh),
        KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Down => Some(Action::ScrollDown),
        _ => None,
    }
}
