//! OpenAI LLM provider using the Chat Completions API.
//!
//! Sends the prompt as a single plain-text user message with no sampling
//! overrides.

use super::provider::{LlmProvider, LlmRequest, LlmResponse};
use crate::error::RelayError;
use crate::upstream::error_chain;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

const CALL_FAILED: &str = "Error calling OpenAI API";
const BAD_RESPONSE: &str = "Invalid response from OpenAI API";

/// OpenAI provider using Chat Completions API.
pub struct OpenAiProvider {
    api_key: String,
    model: String,
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_endpoint(
            api_key,
            model,
            "https://api.openai.com/v1/chat/completions",
        )
    }

    /// Create with a custom endpoint (proxies, compatible servers, tests).
    pub fn with_endpoint(api_key: &str, model: &str, endpoint: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

// --- Request types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// --- Response types ---

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    model: String,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, RelayError> {
        let start = Instant::now();

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
        };

        let mut builder = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| RelayError::upstream(CALL_FAILED, error_chain(&e.without_url())))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(RelayError::Upstream {
                message: CALL_FAILED.to_string(),
                details: format!("OpenAI HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let chat_resp: ChatResponse = resp
            .json()
            .await
            .map_err(|e| RelayError::upstream(BAD_RESPONSE, error_chain(&e.without_url())))?;

        let text = chat_resp
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                RelayError::upstream(BAD_RESPONSE, "empty choices array, no content generated")
            })?;

        Ok(LlmResponse {
            text,
            model: chat_resp.model,
            tokens_used: chat_resp.usage.map(|u| u.total_tokens),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> OpenAiProvider {
        OpenAiProvider::with_endpoint(
            "sk-test",
            "gpt-4o-mini",
            &format!("{}/v1/chat/completions", server.uri()),
        )
    }

    #[tokio::test]
    async fn test_generate_sends_single_user_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "hello"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "gpt-4o-mini-2024-07-18",
                "choices": [{"message": {"role": "assistant", "content": "  {\"plant\": {}}\n"}}],
                "usage": {"total_tokens": 42}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = provider(&server)
            .generate(&LlmRequest {
                prompt: "hello".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.text, "  {\"plant\": {}}\n");
        assert_eq!(response.model, "gpt-4o-mini-2024-07-18");
        assert_eq!(response.tokens_used, Some(42));
    }

    #[tokio::test]
    async fn test_generate_maps_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = provider(&server)
            .generate(&LlmRequest {
                prompt: "hello".to_string(),
            })
            .await
            .unwrap_err();

        match err {
            RelayError::Upstream {
                message,
                details,
                status_code,
            } => {
                assert_eq!(message, CALL_FAILED);
                assert!(details.contains("invalid api key"));
                assert_eq!(status_code, Some(401));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"model": "m", "choices": []})),
            )
            .mount(&server)
            .await;

        let err = provider(&server)
            .generate(&LlmRequest {
                prompt: "hello".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.message(), BAD_RESPONSE);
    }
}
