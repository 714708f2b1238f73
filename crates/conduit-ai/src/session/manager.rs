//! Session construction and accessors.

use conduit_common::{SessionId, ToolError, ToolGateway};
use tracing::{debug, info};

use crate::conversation::Conversation;
use crate::token_tracker::TokenTracker;
use crate::tools::render_system_prompt;
use crate::AiClient;

use super::types::{SessionError, SessionOptions, ToolCallObserver};

/// One connected agent: conversation history plus the two gateways.
pub struct Session {
    pub(super) id: SessionId,
    /// Single writer: only this session appends to it.
    pub(super) conversation: Conversation,
    pub(super) client: Box<dyn AiClient>,
    pub(super) tools: Box<dyn ToolGateway>,
    pub(super) options: SessionOptions,
    pub(super) tracker: TokenTracker,
    pub(super) observer: Option<ToolCallObserver>,
}

impl Session {
    /// Build a session and seed its conversation with a system prompt
    /// rendered from the gateway's catalog.
    pub fn new(
        client: Box<dyn AiClient>,
        tools: Box<dyn ToolGateway>,
        options: SessionOptions,
    ) -> Result<Self, SessionError> {
        let id = SessionId::new();
        let prompt = render_system_prompt(&options.persona, tools.catalog());
        let mut conversation = Conversation::new();
        conversation.initialize(prompt)?;

        info!(
            session = %id,
            model = %options.model,
            tools = tools.catalog().len(),
            "session started"
        );

        Ok(Self {
            id,
            conversation,
            client,
            tools,
            options,
            tracker: TokenTracker::new(),
            observer: None,
        })
    }

    pub fn with_observer(mut self, observer: ToolCallObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools
            .catalog()
            .iter()
            .map(|tool| tool.name.as_str())
            .collect()
    }

    /// Release the tool channel. Safe to call more than once.
    pub async fn close(&self) -> Result<(), ToolError> {
        debug!(session = %self.id, "closing session");
        self.tools.close().await
    }
}
