//! Verdure Core - plant photo identification relay.
//!
//! Verdure takes a plant photo, asks an identification service which species
//! it shows, and asks a completion model for a care guide for that species.
//!
//! # Architecture
//!
//! ```text
//! Upload → Validate → Identify (PlantNet) → Prompt → Complete (OpenAI) → Care guide
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use verdure_core::{Config, Relay, Upload};
//!
//! #[tokio::main]
//! async fn main() -> verdure_core::Result<()> {
//!     let config = Config::load()?;
//!     let relay = Relay::from_config(&config);
//!
//!     let upload = Upload::new("leaf.jpg", "image/jpeg", std::fs::read("leaf.jpg")?);
//!     let guide = relay.identify(&upload).await?;
//!     println!("{}", guide.as_str());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod identify;
pub mod llm;
pub mod relay;
pub mod server;
pub mod types;
pub(crate) mod upstream;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, RelayError, RelayResult, Result, VerdureError};
pub use identify::{IdentificationProvider, PlantNetProvider};
pub use llm::{LlmProvider, LlmRequest, LlmResponse, OpenAiProvider};
pub use relay::Relay;
pub use types::{CareGuide, Identification, Upload};
pub use upstream::resolve_env_var;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
