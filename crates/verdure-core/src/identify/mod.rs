//! Plant species identification.
//!
//! The relay only needs the top match for an uploaded photo; this module
//! hides which service produces it.

pub(crate) mod plantnet;

pub use plantnet::PlantNetProvider;

use crate::error::RelayError;
use crate::types::{Identification, Upload};
use async_trait::async_trait;

/// Trait that identification services implement.
#[async_trait]
pub trait IdentificationProvider: Send + Sync {
    /// Provider name for logging (e.g., "plantnet").
    fn name(&self) -> &str;

    /// Identify the plant in `upload`, returning the best-scoring species.
    async fn identify(&self, upload: &Upload) -> Result<Identification, RelayError>;
}
