//! LLM integration for care guide generation.
//!
//! Provides a provider abstraction over the completion backend plus the
//! fixed prompt template the relay sends for every identified species.

pub(crate) mod openai;
pub(crate) mod prompt;
pub(crate) mod provider;

pub use openai::OpenAiProvider;
pub use prompt::{care_guide_prompt, CARE_GUIDE_SCHEMA};
pub use provider::{LlmProvider, LlmRequest, LlmResponse};
