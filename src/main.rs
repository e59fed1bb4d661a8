//! Weather MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and serves the weather tools
//! over the configured transport.

use anyhow::Result;
use tracing::info;

use weather_mcp_server::core::{Config, McpServer, TransportService, init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::weather(config.clone())?;

    info!("Server initialized with tools: {:?}", server.tool_names());

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}
