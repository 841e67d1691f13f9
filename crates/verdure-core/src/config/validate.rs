//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    ///
    /// API keys are deliberately not checked here: a missing key only
    /// surfaces when the provider rejects a call.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be > 0".into(),
            ));
        }
        if self.server.max_upload_mb == 0 {
            return Err(ConfigError::ValidationError(
                "server.max_upload_mb must be > 0".into(),
            ));
        }
        if self.identification.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "identification.endpoint must not be empty".into(),
            ));
        }
        if self.identification.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "identification.timeout_secs must be > 0 when set".into(),
            ));
        }
        if self.openai.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "openai.endpoint must not be empty".into(),
            ));
        }
        if self.openai.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "openai.model must not be empty".into(),
            ));
        }
        if self.openai.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "openai.timeout_secs must be > 0 when set".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_upload_limit() {
        let mut config = Config::default();
        config.server.max_upload_mb = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_upload_mb"));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = Config::default();
        config.openai.model = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("openai.model"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.identification.timeout_secs = Some(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("identification.timeout_secs"));
    }

    #[test]
    fn test_validate_accepts_missing_api_keys() {
        let mut config = Config::default();
        config.identification.api_key = String::new();
        config.openai.api_key = String::new();
        assert!(config.validate().is_ok());
    }
}
