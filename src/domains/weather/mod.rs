//! Weather domain module.
//!
//! This module holds the weather business logic independent of MCP:
//! the Open-Meteo forecast client and the text reports returned to agents.
//!
//! ## Architecture
//!
//! - `client.rs` - Open-Meteo HTTP client (one shared `reqwest::Client`)
//! - `report.rs` - Report formatting for forecast and air quality results
//! - `error.rs` - Weather-specific error types

mod client;
mod error;
pub mod report;

pub use client::{CURRENT_FIELDS, DEFAULT_BASE_URL, OpenMeteoClient};
pub use error::{WeatherError, WeatherResult};
