//! Weather-specific error types.

use thiserror::Error;

/// Result type for weather operations.
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Errors that can occur while talking to the forecast endpoint.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent (DNS, connection refused, timeout).
    /// reqwest's message already names the URL.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl WeatherError {
    /// Create an upstream status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}
