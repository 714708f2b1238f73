//! Tool-server launch settings.

use serde::{Deserialize, Serialize};

/// How tool-server scripts are launched and how long a request may take.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interpreter for `.py` scripts.
    pub python_command: String,
    /// Interpreter for `.js` scripts.
    pub node_command: String,
    /// Per-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            python_command: "python".to_string(),
            node_command: "node".to_string(),
            request_timeout_secs: 30,
        }
    }
}
