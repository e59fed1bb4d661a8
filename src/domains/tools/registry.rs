//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is the explicit table of exposed tools, built at startup and
//! handed to the transports:
//! - tool names and metadata for listing
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - the source the rmcp router is built from (see `router.rs`)

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{AirQualityTool, WeatherForecastTool};
use crate::domains::weather::OpenMeteoClient;

/// Tool registry - manages all available tools.
///
/// A registry without a forecast client exposes no tools (hub role).
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    weather: Option<Arc<OpenMeteoClient>>,
}

impl ToolRegistry {
    /// Create a registry exposing the weather tools.
    pub fn new(client: Arc<OpenMeteoClient>) -> Self {
        Self {
            weather: Some(client),
        }
    }

    /// Create a registry with no tools.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared forecast client, if the weather tools are registered.
    pub fn weather_client(&self) -> Option<&Arc<OpenMeteoClient>> {
        self.weather.as_ref()
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        match self.weather {
            Some(_) => vec![WeatherForecastTool::NAME, AirQualityTool::NAME],
            None => Vec::new(),
        }
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        match self.weather {
            Some(_) => vec![WeatherForecastTool::to_tool(), AirQualityTool::to_tool()],
            None => Vec::new(),
        }
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        use super::ToolError;

        let Some(client) = self.weather.clone() else {
            warn!("Tool requested on a server with no tools: {}", name);
            return Err(ToolError::not_found(name).to_string());
        };

        match name {
            WeatherForecastTool::NAME => WeatherForecastTool::http_handler(arguments, client).await,
            AirQualityTool::NAME => AirQualityTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WeatherConfig;

    fn weather_registry() -> ToolRegistry {
        let client = OpenMeteoClient::new(&WeatherConfig::default()).unwrap();
        ToolRegistry::new(Arc::new(client))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = weather_registry().tool_names();
        assert_eq!(names, vec!["getWeatherForecastByLocation", "getAirQuality"]);
    }

    #[test]
    fn test_registry_tools_match_names() {
        let registry = weather_registry();
        let tools = registry.tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, registry.tool_names());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::empty();
        assert!(registry.tool_names().is_empty());
        assert!(registry.tools().is_empty());
        assert!(registry.weather_client().is_none());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_air_quality() {
        let registry = weather_registry();
        let result = registry
            .call_tool(
                "getAirQuality",
                serde_json::json!({ "latitude": "39.9042", "longitude": "116.4074" }),
            )
            .await;
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let result = weather_registry()
            .call_tool("unknown", serde_json::json!({}))
            .await;
        assert_eq!(result.unwrap_err(), "Unknown tool: unknown");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_empty_registry_rejects_calls() {
        let result = ToolRegistry::empty()
            .call_tool("getAirQuality", serde_json::json!({}))
            .await;
        assert!(result.is_err());
    }
}
