//! PlantNet identification provider.
//!
//! Posts the photo as multipart `images` with optional `organs` hints and
//! reads the species record of the first result.

use super::IdentificationProvider;
use crate::error::RelayError;
use crate::types::{Identification, Upload};
use crate::upstream::error_chain;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::{Duration, Instant};

const CALL_FAILED: &str = "Error calling PlantNet API";
const BAD_RESPONSE: &str = "Invalid response from PlantNet API";
const NO_RESULTS: &str = "No results returned by PlantNet API";

/// PlantNet provider using the `v2/identify` API.
pub struct PlantNetProvider {
    api_key: String,
    endpoint: String,
    organs: Vec<String>,
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl PlantNetProvider {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
            organs: Vec::new(),
            client: reqwest::Client::new(),
            timeout: None,
        }
    }

    /// Organ hints ("leaf", "flower", ...) sent alongside every image.
    pub fn with_organs(mut self, organs: Vec<String>) -> Self {
        self.organs = organs;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn form(&self, upload: &Upload) -> Form {
        // `Bytes` clones share the buffer, so a failed mime_str costs nothing.
        let image_part = || {
            Part::stream_with_length(upload.data.clone(), upload.len() as u64)
                .file_name(upload.file_name.clone())
        };
        let part = image_part()
            .mime_str(&upload.content_type)
            .unwrap_or_else(|_| {
                tracing::debug!(
                    content_type = %upload.content_type,
                    "Unparseable content type, sending image without one"
                );
                image_part()
            });

        self.organs
            .iter()
            .fold(Form::new().part("images", part), |form, organ| {
                form.text("organs", organ.clone())
            })
    }
}

// --- Response types ---

// Only the first result is ever read, so later entries stay untyped and a
// malformed tail cannot fail the request.
#[derive(Deserialize)]
struct IdentifyResponse {
    #[serde(default)]
    results: Option<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
struct IdentifyResult {
    score: Option<f64>,
    species: Species,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Species {
    scientific_name: String,
    family: Taxon,
    #[serde(default)]
    common_names: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Taxon {
    scientific_name: String,
}

impl From<IdentifyResult> for Identification {
    fn from(result: IdentifyResult) -> Self {
        let species = result.species;
        Identification {
            family: species.family.scientific_name,
            scientific_name: species.scientific_name,
            common_name: species.common_names.and_then(|names| names.into_iter().next()),
            score: result.score,
        }
    }
}

/// Extract the top match from a raw PlantNet response body.
fn parse_identification(body: &[u8]) -> Result<Identification, RelayError> {
    let parsed: IdentifyResponse = serde_json::from_slice(body)
        .map_err(|e| RelayError::upstream(BAD_RESPONSE, e.to_string()))?;

    let first = parsed
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| RelayError::upstream(NO_RESULTS, "results list is missing or empty"))?;

    let result: IdentifyResult = serde_json::from_value(first)
        .map_err(|e| RelayError::upstream(BAD_RESPONSE, format!("results[0]: {e}")))?;
    Ok(result.into())
}

#[async_trait]
impl IdentificationProvider for PlantNetProvider {
    fn name(&self) -> &str {
        "plantnet"
    }

    async fn identify(&self, upload: &Upload) -> Result<Identification, RelayError> {
        let start = Instant::now();

        let mut builder = self
            .client
            .post(&self.endpoint)
            .query(&[("api-key", self.api_key.as_str())])
            .multipart(self.form(upload));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        // without_url(): the request URL carries the API key.
        let resp = builder
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                let status_code = e.status().map(|s| s.as_u16());
                RelayError::Upstream {
                    message: CALL_FAILED.to_string(),
                    details: error_chain(&e.without_url()),
                    status_code,
                }
            })?;

        let body = resp
            .bytes()
            .await
            .map_err(|e| RelayError::upstream(CALL_FAILED, error_chain(&e.without_url())))?;

        let identification = parse_identification(&body)?;

        tracing::debug!(
            scientific_name = %identification.scientific_name,
            score = ?identification.score,
            latency_ms = start.elapsed().as_millis() as u64,
            "PlantNet identification complete"
        );

        Ok(identification)
    }
}
