use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures raised by a tool gateway.
///
/// Everything except `UnsupportedServerKind` is scoped to a single query:
/// the interactive loop reports it and keeps accepting input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("unsupported server script (expected .py or .js): {0}")]
    UnsupportedServerKind(PathBuf),

    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("protocol error: {0}")]
    Protocol(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConduitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("model.api_key is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: model.api_key is empty"
        );
    }

    #[test]
    fn tool_error_display() {
        let err = ToolError::UnsupportedServerKind(PathBuf::from("server.rb"));
        assert_eq!(
            err.to_string(),
            "unsupported server script (expected .py or .js): server.rb"
        );

        let err = ToolError::ToolNotFound("get_alerts".into());
        assert_eq!(err.to_string(), "tool not found: get_alerts");

        let err = ToolError::Transport("server closed stdout".into());
        assert_eq!(err.to_string(), "transport error: server closed stdout");

        let err = ToolError::Protocol("JSON-RPC error -32601: Method not found".into());
        assert!(err.to_string().starts_with("protocol error:"));
    }

    #[test]
    fn conduit_error_from_config() {
        let err: ConduitError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, ConduitError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn conduit_error_from_tool() {
        let err: ConduitError = ToolError::ToolNotFound("nope".into()).into();
        assert!(matches!(err, ConduitError::Tool(_)));
        assert_eq!(err.to_string(), "tool not found: nope");
    }

    #[test]
    fn conduit_error_other_variants() {
        let err = ConduitError::Ai("model unavailable".into());
        assert_eq!(err.to_string(), "ai error: model unavailable");

        let err = ConduitError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
