//! `McpSession`: handshake, tool discovery, tool calls, shutdown.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use conduit_common::{ToolDescriptor, ToolError, ToolGateway, ToolResult};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::launch::{ConnectOptions, ServerCommand};
use crate::protocol::{
    ClientCapabilities, ClientInfo, InitializeParams, ListToolsResult, ToolCallParams,
    ToolCallResult, MCP_PROTOCOL_VERSION,
};
use crate::transport::StdioTransport;
use crate::McpError;

/// A live connection to one tool server.
pub struct McpSession {
    transport: StdioTransport,
    tools: Vec<ToolDescriptor>,
}

impl McpSession {
    /// Launch the server script at `script` and discover its tools.
    ///
    /// The script kind is checked before anything is spawned.
    pub async fn connect(script: &Path, options: &ConnectOptions) -> Result<Self, McpError> {
        let command = ServerCommand::for_script(script, &options.launchers)?;
        Self::spawn(&command, options.request_timeout).await
    }

    /// Spawn an arbitrary command as the tool server.
    ///
    /// If the handshake or discovery fails the child is shut down before the
    /// error is returned, so a failed connect leaves nothing behind.
    pub async fn spawn(command: &ServerCommand, request_timeout: Duration) -> Result<Self, McpError> {
        let transport = StdioTransport::spawn(command, request_timeout)?;

        match Self::handshake(&transport).await {
            Ok(tools) => {
                info!(
                    server = %transport.label(),
                    tools = tools.len(),
                    "connected to tool server"
                );
                Ok(Self { transport, tools })
            }
            Err(e) => {
                transport.shutdown().await;
                Err(e)
            }
        }
    }

    async fn handshake(transport: &StdioTransport) -> Result<Vec<ToolDescriptor>, McpError> {
        let params = InitializeParams {
            protocol_version: MCP_PROTOCOL_VERSION.into(),
            capabilities: ClientCapabilities {},
            client_info: ClientInfo {
                name: "conduit".into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
        };
        let response = transport
            .request("initialize", Some(serde_json::to_value(&params)?))
            .await?;
        debug!(server = %transport.label(), server_info = %response["serverInfo"], "initialized");

        transport.notify("notifications/initialized", None).await?;

        let result = transport.request("tools/list", None).await?;
        let listed: ListToolsResult = serde_json::from_value(result)
            .map_err(|e| McpError::Protocol(format!("failed to parse tools list: {e}")))?;

        Ok(listed.tools.into_iter().map(ToolDescriptor::from).collect())
    }

    /// Names of the discovered tools, in server order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    async fn invoke(&self, name: &str, input: &Map<String, Value>) -> Result<ToolResult, McpError> {
        if !self.has_tool(name) {
            return Err(McpError::ToolNotFound(name.to_string()));
        }

        let params = ToolCallParams {
            name,
            arguments: input,
        };
        let result = self
            .transport
            .request("tools/call", Some(serde_json::to_value(&params)?))
            .await?;

        let call_result: ToolCallResult = serde_json::from_value(result)
            .map_err(|e| McpError::Protocol(format!("malformed tools/call result: {e}")))?;
        Ok(call_result.into_tool_result())
    }
}

#[async_trait]
impl ToolGateway for McpSession {
    fn catalog(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    async fn call_tool(&self, name: &str, input: &Map<String, Value>) -> Result<ToolResult, ToolError> {
        debug!(server = %self.transport.label(), tool = %name, "tools/call");
        Ok(self.invoke(name, input).await?)
    }

    async fn close(&self) -> Result<(), ToolError> {
        self.transport.shutdown().await;
        Ok(())
    }
}
