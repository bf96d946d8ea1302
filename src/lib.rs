//! coinsay: ask an LLM to phrase the current price of a cryptocurrency.
//!
//! A [`session::Session`] owns a [`agent::PriceAgent`], which owns the
//! per-session [`cache::ResponseCache`]. On a cache miss the agent fetches a
//! price sentence from CoinCap and has a Together-hosted model phrase it.
//!
//! ```no_run
//! use coinsay::agent::PriceAgent;
//! use coinsay::config::Config;
//!
//! # tokio_test::block_on(async {
//! let mut agent = PriceAgent::from_config(&Config::load()?)?;
//! println!("{}", agent.resolve("bitcoin").await?);
//! # Ok::<(), coinsay::error::CoinsayError>(())
//! # });
//! ```

pub mod agent;
pub mod cache;
pub mod config;
pub mod error;
pub mod price;
pub mod providers;
pub mod session;
pub mod utils;

pub use agent::{PriceAgent, Resolution, CONTEXT_PREFIX};
pub use cache::ResponseCache;
pub use config::Config;
pub use error::{CoinsayError, Result};
pub use price::{CoinCapClient, PriceQuote, PriceSource};
pub use providers::{CompletionProvider, CompletionRequest, CompletionResponse, TogetherProvider};
pub use session::{Reply, Session, SessionInput};
