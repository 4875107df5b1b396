//! Event System
//!
//! Types and implementations for fetch-cycle status events

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    /// A completed fetch cycle.
    pub fn success(msg: String) -> Self {
        Self::new(msg, EventType::Success, LogLevel::Info)
    }

    /// A failed fetch cycle, classified by the quote-source error.
    pub fn error(msg: String, log_level: LogLevel) -> Self {
        Self::new(msg, EventType::Error, log_level)
    }

    /// A manually requested refresh in flight.
    pub fn refresh(msg: String) -> Self {
        Self::new(msg, EventType::Refresh, LogLevel::Debug)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_events_always_display() {
        let event = Event::success("updated 5 quotes".to_string());
        assert_eq!(event.event_type, EventType::Success);
        assert!(event.should_display());
    }

    #[test]
    fn test_error_events_carry_their_level() {
        let event = Event::error("HTTP 500: boom".to_string(), LogLevel::Warn);
        assert_eq!(event.log_level, LogLevel::Warn);
        assert!(event.should_display());
    }

    #[test]
    fn test_display_includes_type_and_message() {
        let event = Event::success("updated".to_string());
        let rendered = event.to_string();
        assert!(rendered.starts_with("Success ["));
        assert!(rendered.ends_with("] updated"));
    }
}
