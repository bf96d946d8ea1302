//! Error types for coinsay.
//!
//! Price lookups never produce an error value: their failures are rendered
//! into the returned text. Everything else (completion calls, config loading)
//! reports through [`CoinsayError`].

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum CoinsayError {
    /// The LLM provider failed: transport error, non-2xx status or a body we
    /// could not understand.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Missing or rejected credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid or unreadable configuration.
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, CoinsayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_variant_prefix() {
        let err = CoinsayError::Provider("boom".into());
        assert_eq!(err.to_string(), "Provider error: boom");
        let err = CoinsayError::Unauthorized("no key".into());
        assert_eq!(err.to_string(), "Unauthorized: no key");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{nope");
        let err: CoinsayError = parse.unwrap_err().into();
        assert!(matches!(err, CoinsayError::Json(_)));
    }
}
