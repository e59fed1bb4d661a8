//! MCP Hub Entry Point
//!
//! Starts the hub application shell: an MCP server with no tools registered.

use anyhow::Result;
use tracing::info;

use weather_mcp_server::core::{Config, McpServer, TransportService, init_logging};

const HUB_NAME: &str = "mcp-hub";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env_named(HUB_NAME);

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::hub(config.clone());

    TransportService::new(config.transport).run(server).await?;

    info!("Hub shutting down");

    Ok(())
}
