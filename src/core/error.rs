//! Error types and handling for the MCP server.
//!
//! Errors raised while assembling a server. Tool calls never fail with this
//! type: tool failures are reported to the client inside the tool result.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the weather domain.
    #[error("Weather error: {0}")]
    Weather(#[from] crate::domains::weather::WeatherError),
}
