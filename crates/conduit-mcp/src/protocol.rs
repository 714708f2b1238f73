use conduit_common::{ToolDescriptor, ToolResult};
use serde::{Deserialize, Serialize};

pub(crate) const JSONRPC_VERSION: &str = "2.0";
pub(crate) const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC 2.0 request for MCP protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl JsonRpcRequest {
    pub fn new(id: u64, method: &str, params: Option<serde_json::Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id,
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 notification (no id, no response expected).
#[derive(Debug, Clone, Serialize)]
pub(crate) struct JsonRpcNotification {
    pub jsonrpc: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl JsonRpcNotification {
    pub fn new(method: &str, params: Option<serde_json::Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response from MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn into_result(self) -> Result<serde_json::Value, crate::McpError> {
        if let Some(err) = self.error {
            Err(crate::McpError::Protocol(format!(
                "JSON-RPC error {}: {}",
                err.code, err.message
            )))
        } else {
            Ok(self.result.unwrap_or(serde_json::Value::Null))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// MCP tool definition as returned by tools/list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpToolDefinition {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_schema")]
    pub input_schema: serde_json::Value,
}

fn default_schema() -> serde_json::Value {
    serde_json::json!({"type": "object"})
}

impl From<McpToolDefinition> for ToolDescriptor {
    fn from(def: McpToolDefinition) -> Self {
        ToolDescriptor {
            name: def.name,
            description: def.description.unwrap_or_default(),
            input_schema: def.input_schema,
        }
    }
}

/// Result of tools/list.
#[derive(Debug, Deserialize)]
pub(crate) struct ListToolsResult {
    #[serde(default)]
    pub tools: Vec<McpToolDefinition>,
}

/// MCP initialize request params.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InitializeParams {
    pub protocol_version: String,
    pub capabilities: ClientCapabilities,
    pub client_info: ClientInfo,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClientCapabilities {}

#[derive(Debug, Serialize)]
pub(crate) struct ClientInfo {
    pub name: String,
    pub version: String,
}

/// MCP tools/call request params.
#[derive(Debug, Serialize)]
pub(crate) struct ToolCallParams<'a> {
    pub name: &'a str,
    pub arguments: &'a serde_json::Map<String, serde_json::Value>,
}

/// MCP tools/call result.
///
/// Content parts are kept as raw JSON: text parts are read as text, every
/// other part type is carried through verbatim.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    #[serde(default)]
    pub content: Vec<serde_json::Value>,
    #[serde(default)]
    pub is_error: bool,
}

impl ToolCallResult {
    /// Flatten the content parts into one text blob, one part per line.
    pub fn into_tool_result(self) -> ToolResult {
        let text = self
            .content
            .iter()
            .map(|part| match (part["type"].as_str(), part["text"].as_str()) {
                (Some("text"), Some(text)) => text.to_string(),
                _ => part.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n");

        ToolResult {
            text,
            is_error: self.is_error,
        }
    }
}
