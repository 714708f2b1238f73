//! Mapping a tool-server script to the command that runs it.

use std::path::Path;
use std::time::Duration;

use crate::McpError;

/// Script kinds a tool server may be written in, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerKind {
    Python,
    Node,
}

impl ServerKind {
    /// `.py` is Python, `.js` is Node; anything else is rejected.
    pub fn from_path(path: &Path) -> Result<Self, McpError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("py") => Ok(ServerKind::Python),
            Some("js") => Ok(ServerKind::Node),
            _ => Err(McpError::UnsupportedServerKind(path.to_path_buf())),
        }
    }
}

/// Interpreters used to launch each server kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launchers {
    pub python: String,
    pub node: String,
}

impl Default for Launchers {
    fn default() -> Self {
        Self {
            python: "python".to_string(),
            node: "node".to_string(),
        }
    }
}

impl Launchers {
    pub fn for_kind(&self, kind: ServerKind) -> &str {
        match kind {
            ServerKind::Python => &self.python,
            ServerKind::Node => &self.node,
        }
    }
}

/// Settings for [`crate::McpSession::connect`].
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub launchers: Launchers,
    /// Upper bound on each request/response exchange.
    pub request_timeout: Duration,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            launchers: Launchers::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// A program plus arguments to spawn as the tool server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ServerCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build `<interpreter> <script>` for a script path.
    pub fn for_script(script: &Path, launchers: &Launchers) -> Result<Self, McpError> {
        let kind = ServerKind::from_path(script)?;
        Ok(Self::new(
            launchers.for_kind(kind),
            [script.to_string_lossy().into_owned()],
        ))
    }

    /// Human-readable label for logs.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
