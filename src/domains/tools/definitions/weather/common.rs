//! Common utilities shared across weather tools.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::ToolError;

/// Parameters shared by every weather tool.
///
/// Values are kept as strings and forwarded untouched.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CoordinateParams {
    /// Latitude, e.g. 39.9042.
    #[schemars(description = "纬度，例如：39.9042")]
    pub latitude: String,

    /// Longitude, e.g. 116.4074.
    #[schemars(description = "经度，例如：116.4074")]
    pub longitude: String,
}

impl CoordinateParams {
    /// Build parameters from any string-like latitude and longitude.
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Extract parameters from raw JSON-RPC arguments.
    pub fn from_arguments(arguments: &serde_json::Value) -> Result<Self, ToolError> {
        let latitude = string_argument(arguments, "latitude")?;
        let longitude = string_argument(arguments, "longitude")?;
        Ok(Self::new(latitude, longitude))
    }
}

fn string_argument(arguments: &serde_json::Value, key: &str) -> Result<String, ToolError> {
    arguments
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| ToolError::invalid_arguments(format!("Missing or invalid '{}' parameter", key)))
}

/// Create a success result with text content.
pub fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Create an error result with text content.
pub fn error_text_result(text: String) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text)])
}

/// Render a tool result as the JSON body of an HTTP `tools/call` response.
#[cfg(feature = "http")]
pub fn to_http_response(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// First text block of a tool result, if any.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
