//! LLM completion providers.
//!
//! The phrasing step needs exactly one thing from an LLM: turn a prompt into a
//! short completion. Providers report every failure as an error; nothing here
//! degrades into text.

pub mod together;

use async_trait::async_trait;

use crate::error::{CoinsayError, Result};

pub use together::TogetherProvider;

/// A single text-completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens,
        }
    }
}

/// Text of the first completion choice, untrimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub text: String,
}

impl CompletionResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A hosted text-completion endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}

/// Map an HTTP error status and body to an error variant.
pub fn parse_provider_error(status: u16, body: &str) -> CoinsayError {
    match status {
        401 | 403 => CoinsayError::Unauthorized(format!("HTTP {}: {}", status, body)),
        _ => CoinsayError::Provider(format!("HTTP {}: {}", status, body)),
    }
}
