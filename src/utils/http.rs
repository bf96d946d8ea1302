//! Shared HTTP client construction.

use std::time::Duration;

use reqwest::Client;

use crate::error::{CoinsayError, Result};

/// Build the reqwest client shared by the price lookup and the LLM provider.
pub fn build_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("coinsay/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| CoinsayError::Config(format!("Failed to build HTTP client: {}", e)))
}
