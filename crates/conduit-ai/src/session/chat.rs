//! `process_query`: the per-query state machine.

use tracing::{debug, warn};

use crate::tools::{tool_failure_message, tool_result_message, ModelOutput};

use super::manager::Session;
use super::types::SessionError;

impl Session {
    /// Turn one user query into one final answer, with at most one tool
    /// round in between.
    pub async fn process_query(&mut self, query: &str) -> Result<String, SessionError> {
        self.conversation.append_user(query);

        let reply = self.call_model().await?;

        let invocation = match ModelOutput::classify(&reply) {
            ModelOutput::PlainText(text) => {
                debug!(session = %self.id, "plain-text answer");
                if self.options.persist_answers {
                    self.conversation.append_assistant(text.as_str());
                }
                return Ok(text);
            }
            ModelOutput::ToolCall(invocation) => invocation,
        };

        self.conversation.append_assistant(reply);
        if let Some(observer) = &self.observer {
            observer(&invocation, self.conversation.snapshot());
        }
        debug!(session = %self.id, tool = %invocation.name, "dispatching tool call");

        match self
            .tools
            .call_tool(&invocation.name, &invocation.input)
            .await
        {
            Ok(result) => {
                let message = tool_result_message(&self.options.result_instruction, &result);
                self.conversation.append_user(message);
            }
            Err(e) => {
                warn!(session = %self.id, tool = %invocation.name, error = %e, "tool call failed");
                self.conversation
                    .append_user(tool_failure_message(&invocation.name, &e));
                return Err(e.into());
            }
        }

        let answer = self.call_model().await?;
        if self.options.persist_answers {
            self.conversation.append_assistant(answer.as_str());
        }
        Ok(answer)
    }

    async fn call_model(&mut self) -> Result<String, SessionError> {
        let response = self
            .client
            .complete(
                &self.options.model,
                self.options.max_tokens,
                self.conversation.snapshot(),
            )
            .await
            .inspect_err(|e| warn!(session = %self.id, error = %e, "model call failed"))?;
        self.tracker.record(&response.usage);
        Ok(response.content)
    }
}
