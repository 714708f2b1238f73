//! Prompt wording.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PERSONA: &str = "a helpful assistant";

pub const DEFAULT_RESULT_INSTRUCTION: &str =
    "The tool returned the result below. Organize it and give the user the final answer.\n";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Who the model is told it is, e.g. "a weather service assistant".
    pub persona: String,
    /// Prefix of the user turn that carries a tool result back to the model.
    pub result_instruction: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            persona: DEFAULT_PERSONA.to_string(),
            result_instruction: DEFAULT_RESULT_INSTRUCTION.to_string(),
        }
    }
}
