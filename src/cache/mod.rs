//! Per-session response caching keyed by cryptocurrency identifier.

pub mod response_cache;

pub use response_cache::{CacheEntry, CacheStats, ResponseCache};
