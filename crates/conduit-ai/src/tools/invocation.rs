use serde_json::{Map, Value};

/// A tool request parsed out of a model reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub name: String,
    pub input: Map<String, Value>,
}

impl ToolInvocation {
    /// Arguments as compact JSON, for display.
    pub fn input_json(&self) -> String {
        Value::Object(self.input.clone()).to_string()
    }
}

/// What a first-call reply turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    PlainText(String),
    ToolCall(ToolInvocation),
}

impl ModelOutput {
    /// Classify a raw reply.
    ///
    /// A tool call is a reply whose trimmed text is exactly one JSON object
    /// with a string `name` and an object `input`. Every other reply is
    /// plain text and keeps its original bytes, surrounding whitespace
    /// included.
    pub fn classify(text: &str) -> Self {
        match parse_invocation(text.trim()) {
            Some(invocation) => ModelOutput::ToolCall(invocation),
            None => ModelOutput::PlainText(text.to_string()),
        }
    }
}

fn parse_invocation(text: &str) -> Option<ToolInvocation> {
    if !text.starts_with('{') {
        return None;
    }
    let Value::Object(mut object) = serde_json::from_str::<Value>(text).ok()? else {
        return None;
    };
    let name = match object.remove("name")? {
        Value::String(name) => name,
        _ => return None,
    };
    let input = match object.remove("input")? {
        Value::Object(input) => input,
        _ => return None,
    };
    Some(ToolInvocation { name, input })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_call_is_recognised() {
        let output = ModelOutput::classify(r#"{"name":"get_alerts","input":{"state":"NY"}}"#);
        let ModelOutput::ToolCall(call) = output else {
            panic!("expected a tool call");
        };
        assert_eq!(call.name, "get_alerts");
        assert_eq!(call.input.get("state"), Some(&json!("NY")));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let output = ModelOutput::classify("\n  {\"name\": \"get_forecast\", \"input\": {}}\n");
        assert!(matches!(output, ModelOutput::ToolCall(ref c) if c.name == "get_forecast"));
    }

    #[test]
    fn extra_keys_are_ignored() {
        let output =
            ModelOutput::classify(r#"{"name":"get_alerts","input":{"state":"CA"},"why":"asked"}"#);
        assert!(matches!(output, ModelOutput::ToolCall(_)));
    }

    #[test]
    fn plain_text_is_returned_verbatim() {
        for reply in [
            "Hello! How can I help?",
            "  padded answer  ",
            "",
            "[1, 2, 3]",
            "42",
            "\"name\"",
            "{not json}",
            r#"{"name":"get_alerts"}"#,
            r#"{"input":{"state":"NY"}}"#,
            r#"{"name":7,"input":{}}"#,
            r#"{"name":"get_alerts","input":"NY"}"#,
            r#"{"name":"get_alerts","input":null}"#,
            r#"Sure: {"name":"get_alerts","input":{"state":"NY"}}"#,
            r#"{"name":"a","input":{}} {"name":"b","input":{}}"#,
        ] {
            assert_eq!(
                ModelOutput::classify(reply),
                ModelOutput::PlainText(reply.to_string()),
                "misclassified {reply:?}"
            );
        }
    }

    #[test]
    fn input_json_is_compact() {
        let call = ToolInvocation {
            name: "get_forecast".into(),
            input: json!({"latitude": 40.7, "longitude": -74.0})
                .as_object()
                .unwrap()
                .clone(),
        };
        assert_eq!(call.input_json(), r#"{"latitude":40.7,"longitude":-74.0}"#);
    }
}
