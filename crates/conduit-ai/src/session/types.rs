//! Session options, errors and callbacks.

use conduit_common::{ToolError, Turn};

use crate::tools::ToolInvocation;
use crate::{AiError, ConversationError};

/// Called with each parsed tool invocation and the history it is dispatched
/// against, just before the tool runs.
pub type ToolCallObserver = Box<dyn Fn(&ToolInvocation, &[Turn]) + Send + Sync>;

const DEFAULT_MAX_TOKENS: u32 = 4000;
const DEFAULT_PERSONA: &str = "a helpful assistant";
const DEFAULT_RESULT_INSTRUCTION: &str =
    "The tool returned the result below. Organize it and give the user the final answer.\n";

/// Per-session settings that shape requests and history.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub model: String,
    pub max_tokens: u32,
    pub persona: String,
    /// Prefix of the user turn that carries a tool result back to the model.
    pub result_instruction: String,
    /// Record final answers as assistant turns.
    pub persist_answers: bool,
}

impl SessionOptions {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            persona: DEFAULT_PERSONA.to_string(),
            result_instruction: DEFAULT_RESULT_INSTRUCTION.to_string(),
            persist_answers: false,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    pub fn with_result_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.result_instruction = instruction.into();
        self
    }

    pub fn with_persist_answers(mut self, persist: bool) -> Self {
        self.persist_answers = persist;
        self
    }
}

/// A failed query. The session stays usable after any of these.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("model call failed: {0}")]
    Model(#[from] AiError),
    #[error("{0}")]
    Tool(#[from] ToolError),
    #[error(transparent)]
    Conversation(#[from] ConversationError),
}
