//! Text the session feeds to the model besides user queries.

use std::fmt::Write;

use conduit_common::{ToolDescriptor, ToolError, ToolResult};

/// Build the system prompt from the persona and the discovered catalog.
pub fn render_system_prompt(persona: &str, tools: &[ToolDescriptor]) -> String {
    let mut prompt = format!("You are {persona}. You can use the following tools:\n");

    if tools.is_empty() {
        prompt.push_str("(no tools are available)\n");
    }
    for tool in tools {
        let _ = writeln!(prompt, "\nTool: {}", tool.name);
        if !tool.description.is_empty() {
            let _ = writeln!(prompt, "Description: {}", tool.description);
        }
        let _ = writeln!(prompt, "Input schema: {}", tool.input_schema);
    }

    prompt.push_str(
        "\nRules:\n\
         - If you can answer without a tool, reply in plain text.\n\
         - To use a tool, reply with exactly one JSON object and nothing else:\n  \
         {\"name\": \"<tool name>\", \"input\": {<arguments>}}\n\
         - Do not wrap the JSON in prose or code fences.\n\
         - Call at most one tool per reply.\n\
         - Argument names and types must match the tool's input schema.\n",
    );
    prompt
}

/// User turn that hands a tool result back to the model.
pub fn tool_result_message(instruction: &str, result: &ToolResult) -> String {
    format!("{instruction}{result}")
}

/// User turn recorded when a tool round fails.
pub fn tool_failure_message(name: &str, error: &ToolError) -> String {
    format!("Tool call `{name}` failed: {error}")
}
