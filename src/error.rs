//! Error types for snapshot sources.

use thiserror::Error;

/// Why a poll cycle failed.
///
/// Every variant is handled the same way by the poller: the cycle is
/// logged and dropped, and the displayed state stays as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The endpoint answered with a non-success status.
    #[error("Endpoint returned status {0}")]
    Status(u16),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,

    /// Reading a local snapshot failed.
    #[error("Read error: {0}")]
    Io(String),

    /// The producing side of the source has gone away.
    #[error("Source disconnected")]
    Disconnected,
}

impl From<reqwest::Error> for PollError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PollError::Timeout
        } else if err.is_connect() {
            PollError::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            PollError::Status(status.as_u16())
        } else {
            PollError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PollError {
    fn from(err: serde_json::Error) -> Self {
        PollError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for PollError {
    fn from(err: std::io::Error) -> Self {
        PollError::Io(err.to_string())
    }
}
