//! Query resolution: cache check, price lookup, phrasing.
//!
//! A miss costs two sequential network calls (price, then LLM). A hit costs
//! none and is marked with [`CONTEXT_PREFIX`]. Price failures arrive as text
//! and are phrased like any other price sentence; LLM failures abort the
//! resolution and leave the cache untouched.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::ResponseCache;
use crate::config::{Config, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::error::Result;
use crate::price::{CoinCapClient, PriceSource};
use crate::providers::{CompletionProvider, CompletionRequest, TogetherProvider};
use crate::utils::build_client;

/// Prepended to responses served from the session cache.
pub const CONTEXT_PREFIX: &str = "(From context) ";

/// Where a resolved response came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Phrased just now; two network calls were made.
    Fresh(String),
    /// Served from the session cache without any network call.
    Cached(String),
}

impl Resolution {
    /// Text as shown to the user. Cached responses carry [`CONTEXT_PREFIX`].
    pub fn into_display(self) -> String {
        match self {
            Self::Fresh(text) => text,
            Self::Cached(text) => format!("{CONTEXT_PREFIX}{text}"),
        }
    }
}

/// Resolves identifiers into phrased price responses for one session.
pub struct PriceAgent {
    prices: Arc<dyn PriceSource>,
    llm: Arc<dyn CompletionProvider>,
    model: String,
    max_tokens: u32,
    cache: ResponseCache,
}

impl PriceAgent {
    /// Agent with the default model and token budget and an empty cache.
    pub fn new(prices: Arc<dyn PriceSource>, llm: Arc<dyn CompletionProvider>) -> Self {
        Self {
            prices,
            llm,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            cache: ResponseCache::new(),
        }
    }

    /// Wire up CoinCap and Together from configuration, sharing one HTTP client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_client(config.http.timeout_secs)?;
        let prices = CoinCapClient::new(config.price.api_base.clone(), client.clone());
        let llm = TogetherProvider::new(
            config.llm.api_base.clone(),
            config.llm.api_key.clone(),
            client,
        );
        Ok(Self::new(Arc::new(prices), Arc::new(llm))
            .with_model(config.llm.model.clone())
            .with_max_tokens(config.llm.max_tokens))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// The session cache, for display.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Instruction sent to the LLM for a price sentence.
    pub fn phrasing_prompt(price_text: &str) -> String {
        format!("Provide a concise response for {price_text}. Do not hallucinate.")
    }

    /// Resolve `raw_identifier` into display text.
    ///
    /// `raw_identifier` must be non-empty; the session layer filters empty input.
    pub async fn resolve(&mut self, raw_identifier: &str) -> Result<String> {
        self.resolve_detailed(raw_identifier)
            .await
            .map(Resolution::into_display)
    }

    /// Like [`resolve`](Self::resolve) but reports whether the cache answered.
    pub async fn resolve_detailed(&mut self, raw_identifier: &str) -> Result<Resolution> {
        if let Some(cached) = self.cache.get(raw_identifier) {
            return Ok(Resolution::Cached(cached));
        }

        debug!(identifier = raw_identifier, "Cache miss, fetching price");
        let price_text = self.prices.fetch(raw_identifier).await;

        let request = CompletionRequest::new(
            self.model.clone(),
            Self::phrasing_prompt(&price_text),
            self.max_tokens,
        );
        let response = self.llm.complete(request).await?;
        let phrased = response.text.trim().to_string();

        info!(identifier = raw_identifier, "Resolved price response");
        self.cache.put(raw_identifier, phrased.clone());
        Ok(Resolution::Fresh(phrased))
    }
}
