//! The identification relay: photo → species → care guide.
//!
//! A `Relay` is built once at startup and shared read-only across requests.
//! Each call runs the two upstream hops strictly in sequence.

use crate::config::Config;
use crate::error::RelayError;
use crate::identify::{IdentificationProvider, PlantNetProvider};
use crate::llm::{LlmProvider, LlmRequest, OpenAiProvider};
use crate::types::{CareGuide, Upload};
use crate::upstream::resolve_api_key;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Orchestrates identification and care guide generation.
#[derive(Clone)]
pub struct Relay {
    identifier: Arc<dyn IdentificationProvider>,
    llm: Arc<dyn LlmProvider>,
}

impl Relay {
    pub fn new(identifier: Arc<dyn IdentificationProvider>, llm: Arc<dyn LlmProvider>) -> Self {
        Self { identifier, llm }
    }

    /// Build the production providers from configuration.
    ///
    /// Resolves `${ENV_VAR}` keys now; a missing key is logged, not fatal.
    pub fn from_config(config: &Config) -> Self {
        let id_cfg = &config.identification;
        let identifier = PlantNetProvider::new(
            &id_cfg.endpoint,
            &resolve_api_key(&id_cfg.api_key, "plantnet"),
        )
        .with_organs(id_cfg.organs.clone())
        .with_timeout(id_cfg.timeout_secs.map(Duration::from_secs));

        let ai_cfg = &config.openai;
        let llm = OpenAiProvider::with_endpoint(
            &resolve_api_key(&ai_cfg.api_key, "openai"),
            &ai_cfg.model,
            &ai_cfg.endpoint,
        )
        .with_timeout(ai_cfg.timeout_secs.map(Duration::from_secs));

        Self::new(Arc::new(identifier), Arc::new(llm))
    }

    /// Reject uploads the providers could not make sense of.
    pub fn validate(upload: &Upload) -> Result<(), RelayError> {
        if upload.file_name.is_empty() {
            return Err(RelayError::validation("Empty filename provided"));
        }
        Ok(())
    }

    /// Identify the plant in `upload` and fetch a care guide for it.
    pub async fn identify(&self, upload: &Upload) -> Result<CareGuide, RelayError> {
        Self::validate(upload)?;
        let start = Instant::now();

        tracing::info!(
            file_name = %upload.file_name,
            content_type = %upload.content_type,
            size = upload.len(),
            provider = self.identifier.name(),
            "Identifying plant"
        );
        let identification = self.identifier.identify(upload).await.inspect_err(|e| {
            tracing::warn!(provider = self.identifier.name(), "Identification failed: {e}");
        })?;

        if identification.common_name.is_none() {
            tracing::debug!(
                scientific_name = %identification.scientific_name,
                "No common name reported, prompting with scientific name"
            );
        }

        tracing::info!(
            family = %identification.family,
            scientific_name = %identification.scientific_name,
            common_name = ?identification.common_name,
            provider = self.llm.name(),
            "Requesting care guide"
        );
        let request = LlmRequest::care_guide(&identification);
        let response = self.llm.generate(&request).await.inspect_err(|e| {
            tracing::warn!(provider = self.llm.name(), "Care guide generation failed: {e}");
        })?;

        tracing::info!(
            model = %response.model,
            tokens_used = ?response.tokens_used,
            llm_latency_ms = response.latency_ms,
            total_ms = start.elapsed().as_millis() as u64,
            "Care guide ready"
        );

        Ok(CareGuide(response.text))
    }
}
