//! Transports that carry MCP messages to and from the server.
//!
//! Each transport is compiled in by its cargo feature:
//! - `stdio` (default): one session over stdin/stdout
//! - `tcp`: one session per accepted connection
//! - `http`: stateless JSON-RPC over POST, served by axum
//!
//! [`TransportService`] picks the one named by [`TransportConfig`] and runs
//! the [`McpServer`](crate::core::McpServer) on it until shutdown.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
