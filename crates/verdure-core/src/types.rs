//! Core data types flowing through the identification relay.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// An uploaded image, held only for the duration of one request.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Original filename as sent by the client
    pub file_name: String,

    /// Declared MIME type (e.g., "image/jpeg")
    pub content_type: String,

    /// Raw image bytes (reference-counted, cloned without copying)
    pub data: Bytes,
}

impl Upload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Size of the image payload in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Species metadata extracted from the top identification result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    /// Scientific name of the plant family (e.g., "Araceae")
    pub family: String,

    /// Scientific name of the species (e.g., "Monstera deliciosa Liebm.")
    pub scientific_name: String,

    /// First common name reported by the provider, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,

    /// Provider confidence for this match, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Identification {
    /// Name used when asking for a care guide.
    ///
    /// Prefers the common name; falls back to the scientific name when the
    /// provider knows no common name for the species.
    pub fn display_name(&self) -> &str {
        self.common_name
            .as_deref()
            .unwrap_or(self.scientific_name.as_str())
    }
}

/// Care guide text returned by the completion provider.
///
/// Nominally JSON, but never parsed: it is handed back to the caller as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CareGuide(pub String);

impl CareGuide {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
