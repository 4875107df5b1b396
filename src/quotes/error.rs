//! Error handling for the quotes module

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An error occurred while processing the request.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to decode the quote payload returned by the server.
    #[error("Malformed quote payload: {0}")]
    Parse(#[from] serde_json::Error),
}

impl QuoteError {
    pub async fn from_response(response: reqwest::Response) -> QuoteError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        QuoteError::Http { status, message }
    }

    /// Severity used for the dashboard status line.
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Non-critical: rate limiting and temporary server issues
            QuoteError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            QuoteError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: auth problems, malformed responses
            QuoteError::Http { status, .. } if *status == 401 => LogLevel::Error,
            QuoteError::Http { status, .. } if *status == 403 => LogLevel::Error,
            QuoteError::Parse(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}
