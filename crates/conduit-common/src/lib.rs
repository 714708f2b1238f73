//! Shared types for conduit: conversation turns, tool descriptors, the
//! tool-gateway seam, and the error enums every crate converts into.

pub mod errors;
pub mod id;
pub mod tools;
pub mod types;

pub use errors::{ConduitError, ConfigError, ToolError};
pub use id::SessionId;
pub use tools::ToolGateway;
pub use types::{Role, ToolDescriptor, ToolResult, Turn};
