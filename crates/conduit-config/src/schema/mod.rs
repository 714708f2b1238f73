//! Configuration schema types for conduit.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod model;
mod prompt;
mod server;
mod system;

pub use model::*;
pub use prompt::*;
pub use server::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConduitConfig {
    pub model: ModelConfig,
    pub server: ServerConfig,
    pub prompt: PromptConfig,
    pub conversation: ConversationConfig,
    pub logging: LoggingConfig,
}
