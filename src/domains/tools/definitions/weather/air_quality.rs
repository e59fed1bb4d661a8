//! Air quality tool definition.
//!
//! Returns fixed readings for any coordinate pair. No external call is made.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::{info, instrument};

use super::common::{CoordinateParams, text_result};
use crate::domains::weather::report::air_quality_report;

/// Air quality tool.
pub struct AirQualityTool;

impl AirQualityTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getAirQuality";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "根据经纬度获取空气质量信息";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(latitude = %params.latitude, longitude = %params.longitude))]
    pub fn execute(params: &CoordinateParams) -> CallToolResult {
        info!("Air quality tool called");
        text_result(air_quality_report(&params.latitude, &params.longitude))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params = CoordinateParams::from_arguments(&arguments).map_err(|e| e.to_string())?;
        Ok(super::common::to_http_response(Self::execute(&params)))
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
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: CoordinateParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::result_text;
    use super::*;

    #[test]
    fn test_air_quality_execute() {
        let params = CoordinateParams::new("39.9042", "116.4074");
        let result = AirQualityTool::execute(&params);
        assert!(!result.is_error.unwrap_or(false));

        let text = result_text(&result);
        assert!(text.starts_with("当前位置（纬度：39.9042，经度：116.4074）的空气质量："));
        assert!(text.contains("- PM2.5: 15 μg/m³ (优)"));
        assert!(text.contains("- 主要污染物: 无"));
    }

    #[test]
    fn test_air_quality_echoes_invalid_coordinates() {
        let params = CoordinateParams::new("far north", "-1000");
        let text = result_text(&AirQualityTool::execute(&params)).to_string();
        assert!(text.contains("far north"));
        assert!(text.contains("-1000"));
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = AirQualityTool::to_tool();
        assert_eq!(tool.name, AirQualityTool::NAME);
        assert_eq!(tool.description.as_deref(), Some(AirQualityTool::DESCRIPTION));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_air_quality_http_handler() {
        let args = serde_json::json!({ "latitude": "1", "longitude": "2" });
        let response = AirQualityTool::http_handler(args).unwrap();
        assert_eq!(response["isError"], false);
        assert!(response["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("纬度：1"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_air_quality_http_handler_missing_param() {
        let args = serde_json::json!({ "latitude": "1" });
        assert!(AirQualityTool::http_handler(args).is_err());
    }
}
