//! Session gateway to a Model Context Protocol tool server.
//!
//! The server is a child process speaking newline-delimited JSON-RPC 2.0 on
//! its stdin/stdout. [`McpSession::connect`] launches it from a script path,
//! performs the handshake and discovers the tool catalog; the session then
//! implements [`conduit_common::ToolGateway`].

mod launch;
mod protocol;
mod session;
mod transport;

pub use launch::{ConnectOptions, Launchers, ServerCommand, ServerKind};
pub use protocol::{JsonRpcRequest, JsonRpcResponse, McpToolDefinition, ToolCallResult};
pub use session::McpSession;

use conduit_common::ToolError;

#[derive(Debug, thiserror::Error)]
pub enum McpError {
    #[error("unsupported server script (expected .py or .js): {0}")]
    UnsupportedServerKind(std::path::PathBuf),

    #[error("server spawn failed: {0}")]
    SpawnFailed(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("timed out after {0:?} waiting for server response")]
    Timeout(std::time::Duration),
}

impl From<McpError> for ToolError {
    fn from(e: McpError) -> Self {
        match e {
            McpError::UnsupportedServerKind(path) => ToolError::UnsupportedServerKind(path),
            McpError::ToolNotFound(name) => ToolError::ToolNotFound(name),
            McpError::Protocol(msg) => ToolError::Protocol(msg),
            McpError::Transport(msg) => ToolError::Transport(msg),
            McpError::Json(_) => ToolError::Protocol(e.to_string()),
            McpError::SpawnFailed(_) | McpError::Io(_) | McpError::Timeout(_) => {
                ToolError::Transport(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn unsupported_kind_maps_to_tool_error() {
        let err: ToolError = McpError::UnsupportedServerKind(PathBuf::from("srv.rb")).into();
        assert_eq!(err, ToolError::UnsupportedServerKind(PathBuf::from("srv.rb")));
    }

    #[test]
    fn channel_failures_map_to_transport() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        for err in [
            McpError::Io(io),
            McpError::Timeout(Duration::from_secs(1)),
            McpError::SpawnFailed("no such file".into()),
            McpError::Transport("server closed stdout".into()),
        ] {
            assert!(matches!(ToolError::from(err), ToolError::Transport(_)));
        }
    }

    #[test]
    fn protocol_failures_map_to_protocol() {
        let err: ToolError = McpError::Protocol("JSON-RPC error -32602: bad params".into()).into();
        assert!(matches!(err, ToolError::Protocol(msg) if msg.contains("-32602")));
    }

    #[test]
    fn converted_messages_carry_a_single_prefix() {
        let err: ToolError = McpError::Transport("server closed stdout".into()).into();
        assert_eq!(err.to_string(), "transport error: server closed stdout");

        let err: ToolError = McpError::Protocol("JSON-RPC error -32602: bad params".into()).into();
        assert_eq!(err.to_string(), "protocol error: JSON-RPC error -32602: bad params");
    }
}
