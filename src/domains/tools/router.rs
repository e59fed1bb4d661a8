//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{AirQualityTool, WeatherForecastTool};
use super::registry::ToolRegistry;

/// Build the tool router with every tool registered in `registry`.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let router = ToolRouter::new();

    match registry.weather_client() {
        Some(client) => router
            .with_route(WeatherForecastTool::create_route(client.clone()))
            .with_route(AirQualityTool::create_route()),
        None => router,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WeatherConfig;
    use crate::domains::weather::OpenMeteoClient;
    use std::sync::Arc;

    struct TestServer {}

    fn weather_registry() -> ToolRegistry {
        let client = OpenMeteoClient::new(&WeatherConfig::default()).unwrap();
        ToolRegistry::new(Arc::new(client))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(&weather_registry());
        let tools = router.list_all();
        assert_eq!(tools.len(), 2);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"getWeatherForecastByLocation"));
        assert!(names.contains(&"getAirQuality"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry = weather_registry();
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_empty_registry_builds_empty_router() {
        let router: ToolRouter<TestServer> = build_tool_router(&ToolRegistry::empty());
        assert!(router.list_all().is_empty());
    }
}
