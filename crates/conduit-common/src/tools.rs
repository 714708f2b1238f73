//! The seam between the orchestration loop and whatever executes tools.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::{ToolDescriptor, ToolError, ToolResult};

/// A connected tool provider.
///
/// Implementations own the channel to the tool server. The catalog is fixed
/// for the lifetime of the connection.
#[async_trait]
pub trait ToolGateway: Send + Sync {
    /// Tools discovered at connect time, in server order.
    fn catalog(&self) -> &[ToolDescriptor];

    /// Execute `name` with `input` and wait for the result.
    async fn call_tool(&self, name: &str, input: &Map<String, Value>)
        -> Result<ToolResult, ToolError>;

    /// Release the channel. Must be idempotent.
    async fn close(&self) -> Result<(), ToolError>;

    fn has_tool(&self, name: &str) -> bool {
        self.catalog().iter().any(|tool| tool.name == name)
    }
}
