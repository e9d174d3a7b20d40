//! # Error Types
//!
//! Unified error handling for the lottoscope pipeline. Most of these never reach a
//! caller: fetch and parse failures are recovered into an empty
//! [`FrequencyTable`](crate::frequency::FrequencyTable), and everything else is
//! mapped to a user-facing message by the generator.

use thiserror::Error;

/// Result type alias for [`LottoscopeError`]
pub type Result<T> = std::result::Result<T, LottoscopeError>;

/// Error taxonomy for fetching, parsing and generating
#[derive(Debug, Error)]
pub enum LottoscopeError {
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Unexpected response status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Page structure not recognised: {0}")]
    Parse(String),

    #[error("Malformed entry: {0}")]
    MalformedEntry(String),

    #[error("No draw frequency data available")]
    NoDataAvailable,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LottoscopeError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create a malformed entry error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedEntry(message.into())
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether the error came from talking to the external page
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::UnexpectedStatus { .. })
    }
}
