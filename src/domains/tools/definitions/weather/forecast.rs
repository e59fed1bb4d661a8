//! Weather forecast tool definition.
//!
//! Fetches current conditions from Open-Meteo and returns the raw response
//! behind a header naming the coordinates.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument, warn};

use super::common::{CoordinateParams, error_text_result, text_result};
use crate::domains::weather::OpenMeteoClient;
use crate::domains::weather::report::{forecast_failure, forecast_report};

/// Weather forecast tool.
pub struct WeatherForecastTool;

impl WeatherForecastTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getWeatherForecastByLocation";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "根据经纬度获取天气预报";

    /// Execute the tool logic.
    ///
    /// Upstream failures never escape as protocol errors: the failure text is
    /// returned as content and the result is flagged with `isError`.
    #[instrument(skip_all, fields(latitude = %params.latitude, longitude = %params.longitude))]
    pub async fn execute(params: &CoordinateParams, client: &OpenMeteoClient) -> CallToolResult {
        info!("Weather forecast tool called");

        match client
            .fetch_forecast(&params.latitude, &params.longitude)
            .await
        {
            Ok(body) => text_result(forecast_report(&params.latitude, &params.longitude, &body)),
            Err(e) => {
                warn!("Forecast request failed: {}", e);
                error_text_result(forecast_failure(&e.to_string()))
            }
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: Arc<OpenMeteoClient>,
    ) -> Result<serde_json::Value, String> {
        let params = CoordinateParams::from_arguments(&arguments).map_err(|e| e.to_string())?;
        let result = Self::execute(&params, &client).await;
        Ok(super::common::to_http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CoordinateParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(client: Arc<OpenMeteoClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: CoordinateParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
