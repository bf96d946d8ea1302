//! Shared helpers.

pub mod format;
pub mod http;

pub use format::{capitalize, format_usd, normalize_identifier};
pub use http::build_client;
