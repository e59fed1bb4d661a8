//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tools domain.
//!
//! ## Roles
//!
//! The same handler backs both binaries:
//! - [`ServerRole::Weather`] registers the weather tools;
//! - [`ServerRole::Hub`] is an empty application shell with no tools.
//!
//! The ToolRouter is built from the [`ToolRegistry`] in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::tools::{ToolRegistry, build_tool_router};
use crate::domains::weather::OpenMeteoClient;

/// What a server instance exposes to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerRole {
    /// Weather forecast and air quality tools.
    Weather,
    /// Empty hub shell.
    Hub,
}

impl ServerRole {
    /// Instructions sent to clients during initialization.
    pub fn instructions(&self) -> &'static str {
        match self {
            Self::Weather => {
                "Weather MCP server. Use getWeatherForecastByLocation for current conditions \
                 at a latitude/longitude and getAirQuality for air quality readings."
            }
            Self::Hub => "MCP hub. No tools are registered on this server.",
        }
    }
}

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the tool definitions registered for its role.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    role: ServerRole,

    /// Registration table shared with the HTTP transport.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create the weather server with the given configuration.
    ///
    /// Fails only if the outbound HTTP client cannot be built.
    pub fn weather(config: Config) -> super::error::Result<Self> {
        let client = OpenMeteoClient::new(&config.weather)?;
        info!("Forecast endpoint: {}", client.forecast_url());

        let registry = ToolRegistry::new(Arc::new(client));
        Ok(Self::with_registry(config, ServerRole::Weather, registry))
    }

    /// Create the hub server: no tools registered.
    pub fn hub(config: Config) -> Self {
        Self::with_registry(config, ServerRole::Hub, ToolRegistry::empty())
    }

    fn with_registry(config: Config, role: ServerRole, registry: ToolRegistry) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(&registry),
            config: Arc::new(config),
            role,
            registry: Arc::new(registry),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server role.
    pub fn role(&self) -> ServerRole {
        self.role
    }

    /// Names of the tools this server exposes.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.registry.tool_names()
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            instructions: Some(self.role.instructions().to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WeatherConfig;
    use crate::domains::weather::report::FORECAST_FAILURE_LABEL;
    use rmcp::{RoleClient, ServiceError, ServiceExt, service::RunningService};

    /// Serve `server` over an in-memory pipe and connect a client to it.
    async fn connect(server: McpServer) -> RunningService<RoleClient, ()> {
        let (server_io, client_io) = tokio::io::duplex(64 * 1024);
        tokio::spawn(async move {
            if let Ok(service) = server.serve(server_io).await {
                let _ = service.waiting().await;
            }
        });
        ServiceExt::<RoleClient>::serve((), client_io).await.unwrap()
    }

    fn call(name: &str, arguments: serde_json::Value) -> CallToolRequestParam {
        serde_json::from_value(serde_json::json!({ "name": name, "arguments": arguments }))
            .unwrap()
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    /// Weather server whose forecast endpoint is a local port nothing listens on.
    fn offline_weather_server() -> McpServer {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut config = Config::default();
        config.weather = WeatherConfig {
            base_url: format!("http://{}/v1", addr),
            timeout_secs: Some(5),
        };
        McpServer::weather(config).unwrap()
    }

    #[tokio::test]
    async fn test_initialize_reports_configured_identity() {
        let mut config = Config::named("forecast-box");
        config.server.version = "9.9.9".to_string();
        let client = connect(McpServer::weather(config).unwrap()).await;

        let info = client.peer_info().unwrap();
        assert_eq!(info.server_info.name, "forecast-box");
        assert_eq!(info.server_info.version, "9.9.9");
        assert_eq!(
            info.instructions.as_deref(),
            Some(ServerRole::Weather.instructions())
        );

        client.cancel().await.unwrap();
    }

    #[tokio::test]
    async fn test_routed_air_quality_call() {
        let client = connect(McpServer::weather(Config::default()).unwrap()).await;

        let tools = client.list_all_tools().await.unwrap();
        assert_eq!(tools.len(), 2);

        let result = client
            .call_tool(call(
                "getAirQuality",
                serde_json::json!({ "latitude": "39.9042", "longitude": "116.4074" }),
            ))
            .await
            .unwrap();

        assert!(!result.is_error.unwrap_or(false));
        let text = text_of(&result);
        assert!(text.starts_with("当前位置（纬度：39.9042，经度：116.4074）的空气质量："));
        assert!(text.contains("- PM10: 28 μg/m³ (良)"));

        client.cancel().await.unwrap();
    }

    #[tokio::test]
    async fn test_routed_forecast_failure_is_flagged() {
        let client = connect(offline_weather_server()).await;

        let result = client
            .call_tool(call(
                "getWeatherForecastByLocation",
                serde_json::json!({ "latitude": "39.9042", "longitude": "116.4074" }),
            ))
            .await
            .unwrap();

        assert!(result.is_error.unwrap_or(false));
        let text = text_of(&result);
        assert!(text.starts_with(FORECAST_FAILURE_LABEL));
        assert!(text.len() > FORECAST_FAILURE_LABEL.len());

        client.cancel().await.unwrap();
    }

    #[tokio::test]
    async fn test_routed_call_missing_argument() {
        let client = connect(McpServer::weather(Config::default()).unwrap()).await;

        let err = client
            .call_tool(call(
                "getWeatherForecastByLocation",
                serde_json::json!({ "longitude": "116.4074" }),
            ))
            .await
            .unwrap_err();

        match err {
            ServiceError::McpError(e) => {
                assert_eq!(e.code, ErrorCode::INVALID_PARAMS);
                assert!(e.message.contains("latitude"));
            }
            other => panic!("Expected invalid params, got {:?}", other),
        }

        client.cancel().await.unwrap();
    }

    #[tokio::test]
    async fn test_hub_serves_no_tools() {
        let client = connect(McpServer::hub(Config::named("mcp-hub"))).await;

        assert_eq!(client.peer_info().unwrap().server_info.name, "mcp-hub");
        assert!(client.list_all_tools().await.unwrap().is_empty());

        client.cancel().await.unwrap();
    }

    #[test]
    fn test_weather_server_lists_both_tools() {
        let server = McpServer::weather(Config::default()).unwrap();
        assert_eq!(server.role(), ServerRole::Weather);

        let tools = server.list_tools();
        let names: Vec<_> = tools
            .iter()
            .filter_map(|t| t.get("name").and_then(|n| n.as_str()))
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"getWeatherForecastByLocation"));
        assert!(names.contains(&"getAirQuality"));
    }

    #[test]
    fn test_tool_schema_exposes_coordinates() {
        let server = McpServer::weather(Config::default()).unwrap();
        for tool in server.list_tools() {
            let properties = &tool["inputSchema"]["properties"];
            assert!(properties.get("latitude").is_some());
            assert!(properties.get("longitude").is_some());
        }
    }

    #[test]
    fn test_hub_server_has_no_tools() {
        let server = McpServer::hub(Config::named("mcp-hub"));
        assert_eq!(server.role(), ServerRole::Hub);
        assert_eq!(server.name(), "mcp-hub");
        assert!(server.list_tools().is_empty());
        assert!(server.tool_names().is_empty());
    }

    #[test]
    fn test_get_info_advertises_tools() {
        let server = McpServer::hub(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(
            info.instructions.as_deref(),
            Some(ServerRole::Hub.instructions())
        );
        assert_eq!(info.server_info.name, "weather-mcp-server");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }
}
