//! Cryptocurrency price lookup.
//!
//! A lookup never fails from the caller's point of view: transport problems
//! and unexpected payloads are rendered into the returned sentence, which is
//! what gets handed to the phrasing step.

pub mod coincap;

use std::fmt;

use async_trait::async_trait;

use crate::utils::{capitalize, format_usd};

pub use coincap::CoinCapClient;

/// Outcome of a single price lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceQuote {
    /// The service returned a usable USD price.
    Success { identifier: String, amount_usd: f64 },
    /// The service answered, but without a price for this identifier.
    Unrecognized { identifier: String },
    /// Connection error, timeout, non-2xx status or an undecodable body.
    Failure { message: String },
}

impl PriceQuote {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success {
                identifier,
                amount_usd,
            } => write!(
                f,
                "The current price of {} is ${}.",
                capitalize(identifier),
                format_usd(*amount_usd)
            ),
            Self::Unrecognized { identifier } => write!(
                f,
                "Could not retrieve price for {}. Please check the cryptocurrency name.",
                identifier
            ),
            Self::Failure { message } => {
                write!(f, "Error fetching cryptocurrency prices: {}.", message)
            }
        }
    }
}

/// Source of current USD prices.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Look up `identifier`, issuing exactly one request.
    async fn quote(&self, identifier: &str) -> PriceQuote;

    /// The lookup rendered as the sentence fed to the phrasing step.
    async fn fetch(&self, identifier: &str) -> String {
        self.quote(identifier).await.to_string()
    }
}
