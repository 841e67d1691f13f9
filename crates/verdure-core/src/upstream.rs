//! Helpers shared by the upstream provider clients.

use std::error::Error;

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok()
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Resolve an API key from config, logging a warning when it is unset.
///
/// An unset key is not fatal: the provider will reject the call and the
/// relay reports that as an upstream failure.
pub(crate) fn resolve_api_key(value: &str, provider: &str) -> String {
    resolve_env_var(value).unwrap_or_else(|| {
        tracing::warn!(provider, "API key not set ({value}); upstream calls will be rejected");
        String::new()
    })
}

/// Render an error together with its source chain.
///
/// `reqwest` keeps the useful part ("connection refused", the serde message)
/// in the sources, so the top-level `Display` alone is too vague for callers.
pub(crate) fn error_chain(err: &dyn Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_env_var() {
        // Non-env-var strings pass through
        assert_eq!(resolve_env_var("plain-key"), Some("plain-key".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), None);
    }

    #[test]
    fn test_resolve_api_key_defaults_to_empty() {
        assert_eq!(resolve_api_key("${DEFINITELY_NOT_SET_XYZ_456}", "test"), "");
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let outer = crate::error::VerdureError::Io(inner);
        let rendered = error_chain(&outer);
        assert!(rendered.contains("connection refused"));
    }
}
