//! Configuration for coinsay.
//!
//! Loaded from `~/.coinsay/config.json` (or an explicit path), then overridden
//! by environment variables. Every field has a default, so a missing file is
//! not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoinsayError, Result};

/// CoinCap v2 REST API base.
pub const DEFAULT_PRICE_API_BASE: &str = "https://api.coincap.io/v2";

/// Together AI REST API base.
pub const DEFAULT_LLM_API_BASE: &str = "https://api.together.xyz/v1";

/// Model used for the phrasing step.
pub const DEFAULT_MODEL: &str = "meta-llama/Meta-Llama-3-8B-Instruct-Turbo";

/// Generated-token budget for the phrasing step.
pub const DEFAULT_MAX_TOKENS: u32 = 40;

/// Per-request timeout applied to both HTTP clients.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variables holding the LLM API key, in priority order.
pub const API_KEY_ENV_VARS: &[&str] = &["TOGETHER_API", "TOGETHER_API_KEY"];

const MODEL_ENV_VAR: &str = "COINSAY_MODEL";
const PRICE_API_BASE_ENV_VAR: &str = "COINSAY_PRICE_API_BASE";
const LLM_API_BASE_ENV_VAR: &str = "COINSAY_LLM_API_BASE";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub price: PriceConfig,
    pub llm: LlmConfig,
    pub http: HttpConfig,
}

/// Price-quote service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceConfig {
    /// Base URL; `/assets/{id}` is appended per lookup.
    pub api_base: String,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_PRICE_API_BASE.to_string(),
        }
    }
}

/// LLM completion service settings.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_LLM_API_BASE.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl LlmConfig {
    /// Whether a non-blank key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Shared HTTP client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// `~/.coinsay`, or `./.coinsay` when no home directory is known.
    pub fn dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".coinsay")
    }

    /// Default config file location.
    pub fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from the default path and apply environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_with_env(&Self::path())
    }

    /// Load from `path` and apply environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let mut config = Self::load_from_path(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a config file. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data).map_err(|e| {
                CoinsayError::Config(format!("Invalid config file {}: {}", path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(CoinsayError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Apply overrides from a variable lookup. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = API_KEY_ENV_VARS.iter().find_map(|k| get(*k)) {
            self.llm.api_key = Some(key);
        }
        if let Some(model) = get(MODEL_ENV_VAR) {
            self.llm.model = model;
        }
        if let Some(base) = get(PRICE_API_BASE_ENV_VAR) {
            self.price.api_base = base;
        }
        if let Some(base) = get(LLM_API_BASE_ENV_VAR) {
            self.llm.api_base = base;
        }
    }

    /// Copy with the API key masked, for display.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.llm.api_key.is_some() {
            copy.llm.api_key = Some("[REDACTED]".to_string());
        }
        copy
    }
}
