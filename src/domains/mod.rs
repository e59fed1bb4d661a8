//! Domains module containing business logic organized by bounded contexts.
//!
//! - **weather**: Open-Meteo client and report formatting
//! - **tools**: MCP tool definitions and their registration table

pub mod tools;
pub mod weather;
