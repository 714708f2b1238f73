//! Language-model endpoint settings.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat-completion endpoint, credential, and per-call limits.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Full URL of the chat-completions endpoint.
    pub url: String,
    /// Bearer credential. Prefer the `CONDUIT_API_KEY` env var.
    pub api_key: String,
    /// Model identifier sent with every request.
    pub name: String,
    /// Token budget passed through to the provider (valid range: 1-128000).
    pub max_tokens: u32,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_MODEL_URL.to_string(),
            api_key: String::new(),
            name: "gpt-4o".to_string(),
            max_tokens: 4000,
            timeout_secs: 120,
            connect_timeout_secs: 10,
        }
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .field("name", &self.name)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = ModelConfig {
            api_key: "sk-very-secret".into(),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
