use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        f.write_str(s)
    }
}

/// One role-tagged message. Serializes as `{"role": ..., "content": ...}`,
/// the shape chat-completion endpoints expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A callable tool as advertised by the tool server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Output of one tool execution, already flattened to text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolResult {
    pub text: String,
    /// The server flagged the execution as failed. The text still goes back
    /// to the model so it can explain the failure.
    pub is_error: bool,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl fmt::Display for ToolResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_error {
            write!(f, "Tool error: {}", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_serializes_as_chat_message() {
        let turn = Turn::user("weather in NY?");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"role": "user", "content": "weather in NY?"})
        );
    }

    #[test]
    fn role_display_matches_wire_name() {
        for role in [Role::System, Role::User, Role::Assistant] {
            let wire = serde_json::to_value(role).unwrap();
            assert_eq!(wire, serde_json::Value::String(role.to_string()));
        }
    }

    #[test]
    fn tool_descriptor_description_defaults_to_empty() {
        let json = r#"{"name":"get_alerts","input_schema":{"type":"object"}}"#;
        let tool: ToolDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(tool.name, "get_alerts");
        assert!(tool.description.is_empty());
    }

    #[test]
    fn tool_result_display() {
        assert_eq!(ToolResult::text("no active alerts").to_string(), "no active alerts");
        assert_eq!(
            ToolResult::error("state must be two letters").to_string(),
            "Tool error: state must be two letters"
        );
    }
}
