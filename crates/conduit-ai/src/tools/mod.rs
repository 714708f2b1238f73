//! Prompt-level tool calling.
//!
//! The model never sees a native tool API. The system prompt lists the
//! catalog and asks for a bare JSON object when a tool is wanted; replies
//! are classified back into [`ModelOutput`].

mod invocation;
mod prompt;

pub use invocation::{ModelOutput, ToolInvocation};
pub use prompt::{render_system_prompt, tool_failure_message, tool_result_message};
