//! The per-query orchestration loop.
//!
//! A `Session` owns the conversation, the model client and the tool
//! gateway for one connection. Each query runs the same state machine:
//! append the query, call the model, and if the reply is a tool call,
//! dispatch it once and call the model a second time with the result.
//! There is never a second tool round within a query.

mod chat;
mod manager;
mod types;

pub use manager::Session;
pub use types::{SessionError, SessionOptions, ToolCallObserver};
