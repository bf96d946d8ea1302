//! Together AI text-completion provider.
//!
//! Speaks `POST {base}/completions` with a bearer key and reads the first
//! choice's `text`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{CoinsayError, Result};

use super::{parse_provider_error, CompletionProvider, CompletionRequest, CompletionResponse};

/// Completion provider backed by the Together AI REST API.
pub struct TogetherProvider {
    api_base: String,
    api_key: Option<String>,
    client: Client,
}

impl std::fmt::Debug for TogetherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TogetherProvider")
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl TogetherProvider {
    /// Build a provider. A `None` or empty key makes every call fail with
    /// [`CoinsayError::Unauthorized`].
    pub fn new(api_base: impl Into<String>, api_key: Option<String>, client: Client) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            client,
        }
    }

    fn api_url(&self) -> String {
        format!("{}/completions", self.api_base.trim_end_matches('/'))
    }

    fn build_request_body(request: &CompletionRequest) -> Value {
        json!({
            "model": request.model,
            "prompt": request.prompt,
            "max_tokens": request.max_tokens,
        })
    }

    /// Text of `choices[0]`, if present.
    pub fn extract_text(response: &Value) -> Option<String> {
        response["choices"]
            .as_array()?
            .first()?
            .get("text")?
            .as_str()
            .map(String::from)
    }

    fn error_message(body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                v["error"]["message"]
                    .as_str()
                    .or_else(|| v["message"].as_str())
                    .or_else(|| v["error"].as_str())
                    .map(|s| format!("Together API error: {}", s))
            })
            .unwrap_or_else(|| format!("Together API error: {}", body))
    }
}

#[async_trait]
impl CompletionProvider for TogetherProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(CoinsayError::Unauthorized(
                "No Together API key configured (set TOGETHER_API)".to_string(),
            ));
        };

        debug!(model = %request.model, max_tokens = request.max_tokens, "Together completion request");

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(api_key)
            .json(&Self::build_request_body(&request))
            .send()
            .await
            .map_err(|e| CoinsayError::Provider(format!("Together request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(parse_provider_error(status, &Self::error_message(&body)));
        }

        let json: Value = response.json().await.map_err(|e| {
            CoinsayError::Provider(format!("Failed to parse Together response: {}", e))
        })?;

        let text = Self::extract_text(&json).ok_or_else(|| {
            CoinsayError::Provider("Together response has no completion choices".to_string())
        })?;

        Ok(CompletionResponse::text(text))
    }
}
