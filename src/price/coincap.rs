//! CoinCap v2 asset-detail client.
//!
//! `GET {base}/assets/{id}` returns `{"data": {"priceUsd": "<decimal>"}}`.
//! The identifier is lowercased and placed in the path as-is.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::utils::normalize_identifier;

use super::{PriceQuote, PriceSource};

/// Price lookup against the CoinCap REST API.
#[derive(Debug, Clone)]
pub struct CoinCapClient {
    api_base: String,
    client: Client,
}

impl CoinCapClient {
    pub fn new(api_base: impl Into<String>, client: Client) -> Self {
        Self {
            api_base: api_base.into(),
            client,
        }
    }

    /// Asset-detail URL for `identifier`.
    pub fn asset_url(&self, identifier: &str) -> String {
        format!(
            "{}/assets/{}",
            self.api_base.trim_end_matches('/'),
            normalize_identifier(identifier)
        )
    }

    /// Interpret a decoded 2xx body.
    ///
    /// `priceUsd` is a string-encoded decimal; a plain JSON number is accepted
    /// too. Anything else means the identifier was not recognized.
    pub fn parse_payload(identifier: &str, body: &Value) -> PriceQuote {
        let price = &body["data"]["priceUsd"];
        let amount = price
            .as_str()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .or_else(|| price.as_f64())
            .filter(|v| v.is_finite());

        match amount {
            Some(amount_usd) => PriceQuote::Success {
                identifier: identifier.to_string(),
                amount_usd,
            },
            None => PriceQuote::Unrecognized {
                identifier: identifier.to_string(),
            },
        }
    }

    async fn get_json(&self, url: &str) -> reqwest::Result<Value> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}

#[async_trait]
impl PriceSource for CoinCapClient {
    async fn quote(&self, identifier: &str) -> PriceQuote {
        let url = self.asset_url(identifier);
        debug!(%url, "Fetching price quote");

        match self.get_json(&url).await {
            Ok(body) => {
                let quote = Self::parse_payload(identifier, &body);
                if !quote.is_success() {
                    debug!(identifier, "Price payload has no priceUsd");
                }
                quote
            }
            Err(e) => {
                warn!(%url, error = %e, "Price lookup failed");
                PriceQuote::Failure {
                    message: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::build_client;
    use serde_json::json;

    fn client(base: &str) -> CoinCapClient {
        CoinCapClient::new(base, build_client(5).unwrap())
    }

    #[test]
    fn test_asset_url_lowercases_identifier() {
        let c = client("https://api.coincap.io/v2");
        assert_eq!(
            c.asset_url("Bitcoin"),
            "https://api.coincap.io/v2/assets/bitcoin"
        );
    }

    #[test]
    fn test_asset_url_trims_trailing_slash() {
        let c = client("http://localhost:8080/v2/");
        assert_eq!(c.asset_url("eth"), "http://localhost:8080/v2/assets/eth");
    }

    #[test]
    fn test_asset_url_does_not_escape() {
        let c = client("https://api.coincap.io/v2");
        assert_eq!(
            c.asset_url("usd coin"),
            "https://api.coincap.io/v2/assets/usd coin"
        );
    }

    #[test]
    fn test_parse_payload_string_price() {
        let body = json!({"data": {"id": "bitcoin", "priceUsd": "43250.5"}});
        let quote = CoinCapClient::parse_payload("bitcoin", &body);
        assert_eq!(
            quote.to_string(),
            "The current price of Bitcoin is $43,250.50."
        );
    }

    #[test]
    fn test_parse_payload_numeric_price() {
        let body = json!({"data": {"priceUsd": 100.0}});
        let quote = CoinCapClient::parse_payload("dogecoin", &body);
        assert_eq!(
            quote,
            PriceQuote::Success {
                identifier: "dogecoin".into(),
                amount_usd: 100.0
            }
        );
    }

    #[test]
    fn test_parse_payload_missing_field() {
        let body = json!({"data": {}});
        let quote = CoinCapClient::parse_payload("ethereum", &body);
        assert_eq!(
            quote.to_string(),
            "Could not retrieve price for ethereum. Please check the cryptocurrency name."
        );
    }

    #[test]
    fn test_parse_payload_missing_data() {
        let body = json!({"error": "bogus not found"});
        let quote = CoinCapClient::parse_payload("bogus", &body);
        assert!(matches!(quote, PriceQuote::Unrecognized { .. }));
    }

    #[test]
    fn test_parse_payload_null_or_garbage_price() {
        let null = json!({"data": {"priceUsd": null}});
        assert!(!CoinCapClient::parse_payload("x", &null).is_success());
        let garbage = json!({"data": {"priceUsd": "n/a"}});
        assert!(!CoinCapClient::parse_payload("x", &garbage).is_success());
    }

    #[tokio::test]
    async fn test_connection_error_is_in_band_text() {
        // Nothing listens on port 1.
        let c = client("http://127.0.0.1:1/v2");
        let text = c.fetch("bitcoin").await;
        assert!(
            text.starts_with("Error fetching cryptocurrency prices:"),
            "unexpected text: {text}"
        );
        assert!(text.ends_with('.'));
    }
}
