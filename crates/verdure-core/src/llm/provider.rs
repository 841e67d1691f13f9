//! LLM provider trait and request/response types.
//!
//! Defines the interface the care guide generator talks to, so the relay
//! can run against OpenAI in production and a stub in tests.

use super::prompt::care_guide_prompt;
use crate::error::RelayError;
use crate::types::Identification;
use async_trait::async_trait;

/// A single-turn completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    /// Content of the one user message
    pub prompt: String,
}

impl LlmRequest {
    /// Build a care guide request for an identified species.
    pub fn care_guide(identification: &Identification) -> Self {
        Self {
            prompt: care_guide_prompt(identification.display_name()),
        }
    }
}

/// The response from a completion call.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Raw message content, untouched
    pub text: String,
    /// Model identifier reported by the provider
    pub model: String,
    /// Number of tokens used (input + output), if reported
    pub tokens_used: Option<u32>,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Trait that completion providers implement.
///
/// Uses `async_trait` because the relay holds providers as
/// `Arc<dyn LlmProvider>`.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging (e.g., "openai").
    fn name(&self) -> &str;

    /// Generate a completion for the given request.
    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, RelayError>;
}
