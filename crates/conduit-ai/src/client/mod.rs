//! OpenAI-compatible chat-completions client.
//!
//! Any endpoint that accepts `{model, messages, max_tokens, temperature,
//! stream}` and answers with `choices[0].message.content` works.

mod api;
mod config;

pub use api::ChatClient;
pub use config::ChatConfig;
