//! Append-only turn log.
//!
//! The first turn is the system prompt, set exactly once through
//! [`Conversation::initialize`]. After that turns are only appended; nothing
//! is reordered, edited or evicted, so history grows for the whole session.
//! A `Conversation` has a single writer: the [`crate::Session`] that owns it.

use conduit_common::{Role, Turn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversationError {
    #[error("conversation already has a system prompt")]
    AlreadyInitialized,
    #[error("system prompt must be the first turn, but {0} turn(s) were already appended")]
    InitializeAfterTurns(usize),
}

#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the conversation with its system prompt.
    pub fn initialize(&mut self, system_prompt: impl Into<String>) -> Result<(), ConversationError> {
        if self.is_initialized() {
            return Err(ConversationError::AlreadyInitialized);
        }
        if !self.turns.is_empty() {
            return Err(ConversationError::InitializeAfterTurns(self.turns.len()));
        }
        self.turns.push(Turn::system(system_prompt));
        Ok(())
    }

    pub fn append_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::assistant(text));
    }

    /// The full history, in order, as it should be sent to the model.
    pub fn snapshot(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_initialized(&self) -> bool {
        self.turns.first().is_some_and(|t| t.role == Role::System)
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.turns
            .first()
            .filter(|t| t.role == Role::System)
            .map(|t| t.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
