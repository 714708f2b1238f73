//! Model-facing half of conduit.
//!
//! - `AiClient`: one stateless chat-completion call
//! - `Conversation`: the append-only turn log sent with every call
//! - `tools`: system-prompt rendering and tool-call classification
//! - `Session`: the per-query orchestration loop (at most one tool round)
//! - `TokenTracker`: usage totals for the session

pub mod client;
pub mod conversation;
pub mod session;
pub mod token_tracker;
pub mod tools;

use async_trait::async_trait;
use conduit_common::Turn;

pub use client::{ChatClient, ChatConfig};
pub use conversation::{Conversation, ConversationError};
pub use session::{Session, SessionError, SessionOptions, ToolCallObserver};
pub use token_tracker::TokenTracker;
pub use tools::{ModelOutput, ToolInvocation};

/// A chat-completion endpoint.
///
/// Tool use is not a capability of the client: the model is told through
/// the system prompt to answer with a JSON object when it wants a tool, and
/// the session parses that out of the returned text.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        max_tokens: u32,
        turns: &[Turn],
    ) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, Default)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}
