//! Weather MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing weather
//! tools to agents, plus an empty hub server built from the same pieces.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, logging, the server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **weather**: Open-Meteo client and report formatting
//!   - **tools**: MCP tool definitions and their registration table
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::weather(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
