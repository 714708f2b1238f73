//! `ChatClient`: request building, the HTTP call, and response parsing.

use async_trait::async_trait;
use conduit_common::Turn;
use serde::Serialize;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, TokenUsage};

use super::config::ChatConfig;

/// Sampling temperature sent with every request.
pub(crate) const TEMPERATURE: f64 = 0.7;

const USER_AGENT: &str = concat!("conduit/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
    max_tokens: u32,
    temperature: f64,
    stream: bool,
}

/// Stateless client for one chat-completions endpoint.
pub struct ChatClient {
    config: ChatConfig,
    http: reqwest::Client,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Extract the first choice's text and the usage block, if any.
    pub(crate) fn parse_response(json: &serde_json::Value) -> Result<AiResponse, AiError> {
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                AiError::ParseError("response missing choices[0].message.content".into())
            })?
            .to_string();

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

fn map_send_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl AiClient for ChatClient {
    async fn complete(
        &self,
        model: &str,
        max_tokens: u32,
        turns: &[Turn],
    ) -> Result<AiResponse, AiError> {
        let body = ChatRequest {
            model,
            messages: turns,
            max_tokens,
            temperature: TEMPERATURE,
            stream: false,
        };

        debug!(model = %model, turns = turns.len(), "chat completion request");

        let response = self
            .http
            .post(&self.config.url)
            .bearer_auth(&self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let parsed = Self::parse_response(&json)?;
        debug!(
            model = %model,
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "chat completion response"
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_has_fixed_sampling_parameters() {
        let turns = vec![Turn::system("be brief"), Turn::user("hello")];
        let body = ChatRequest {
            model: "gpt-4o",
            messages: &turns,
            max_tokens: 4000,
            temperature: TEMPERATURE,
            stream: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            json!({
                "model": "gpt-4o",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hello"}
                ],
                "max_tokens": 4000,
                "temperature": 0.7,
                "stream": false
            })
        );
    }

    #[test]
    fn parse_response_extracts_first_choice() {
        let json = json!({
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3}
        });
        let response = ChatClient::parse_response(&json).unwrap();
        assert_eq!(response.content, "first");
        assert_eq!(response.usage.total_tokens(), 15);
    }

    #[test]
    fn parse_response_without_usage_defaults_to_zero() {
        let json = json!({"choices": [{"message": {"content": "hi"}}]});
        let response = ChatClient::parse_response(&json).unwrap();
        assert_eq!(response.usage, TokenUsage::default());
    }

    #[test]
    fn parse_response_rejects_malformed_shapes() {
        for json in [
            json!({}),
            json!({"choices": []}),
            json!({"choices": [{"message": {}}]}),
            json!({"choices": [{"message": {"content": null}}]}),
            json!({"error": {"message": "invalid model"}}),
        ] {
            let err = ChatClient::parse_response(&json).unwrap_err();
            assert!(matches!(err, AiError::ParseError(_)), "accepted {json}");
        }
    }

    #[test]
    fn config_debug_redacts_key() {
        let config = ChatConfig::new("https://example.com/v1/chat/completions", "sk-secret");
        assert!(!format!("{config:?}").contains("sk-secret"));
    }
}
