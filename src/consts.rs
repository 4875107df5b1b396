pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Seconds between scheduled quote fetches when the config file does not
    /// override it.
    pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Maximum length of the error message carried by an error row.
    pub const ERROR_MESSAGE_MAX_LEN: usize = 50;

    /// Width of the row-kind column in the table body.
    pub const KIND_COLUMN_WIDTH: usize = 10;

    /// Width of the asset label column; labels are truncated or padded to fit.
    pub const LABEL_COLUMN_WIDTH: usize = 20;

    /// Width of the right-justified value column.
    pub const VALUE_COLUMN_WIDTH: usize = 14;

    /// Lines reserved above the table body: title/status, column labels, separator.
    pub const HEADER_HEIGHT: u16 = 3;

    /// Lines reserved below the table body.
    pub const FOOTER_HEIGHT: u16 = 1;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Quote source HTTP timeouts
    pub mod http {
        use std::time::Duration;

        /// Connection timeout for the quote source (milliseconds)
        pub const CONNECT_TIMEOUT_MS: u64 = 10_000;

        /// Whole-request timeout for the quote source (milliseconds)
        pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

        /// Helper function to get the connection timeout
        pub const fn connect_timeout() -> Duration {
            Duration::from_millis(CONNECT_TIMEOUT_MS)
        }

        /// Helper function to get the whole-request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_millis(REQUEST_TIMEOUT_MS)
        }
    }
}
