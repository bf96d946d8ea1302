//! Session-scoped cache of phrased responses.
//!
//! Keys are lowercased identifiers, so `"Bitcoin"` and `"bitcoin"` share an
//! entry. Nothing is evicted and nothing is written to disk: the cache lives
//! exactly as long as the session that owns it.

use std::collections::HashMap;

use tracing::debug;

use crate::utils::normalize_identifier;

/// A single cached phrased response.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The phrased response text.
    pub response: String,
    /// Position of the identifier's first insertion; kept on overwrite.
    pub sequence: u64,
    /// Number of cache hits for this entry.
    pub hit_count: u32,
}

/// In-memory map from normalized identifier to the last phrased response.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, CacheEntry>,
    next_sequence: u64,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the response for `identifier`. Counts a hit when present.
    pub fn get(&mut self, identifier: &str) -> Option<String> {
        let key = normalize_identifier(identifier);
        let entry = self.entries.get_mut(&key)?;
        entry.hit_count = entry.hit_count.saturating_add(1);
        debug!(identifier = %key, hits = entry.hit_count, "Response cache hit");
        Some(entry.response.clone())
    }

    /// Look up without touching the hit counter.
    pub fn peek(&self, identifier: &str) -> Option<&str> {
        self.entries
            .get(&normalize_identifier(identifier))
            .map(|e| e.response.as_str())
    }

    /// Store or overwrite the response for `identifier`.
    pub fn put(&mut self, identifier: &str, response: String) {
        let key = normalize_identifier(identifier);
        match self.entries.get_mut(&key) {
            Some(entry) => entry.response = response,
            None => {
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                self.entries.insert(
                    key,
                    CacheEntry {
                        response,
                        sequence,
                        hit_count: 0,
                    },
                );
            }
        }
    }

    /// All `(identifier, response)` pairs in first-insertion order.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut all: Vec<(&String, &CacheEntry)> = self.entries.iter().collect();
        all.sort_by_key(|(_, e)| e.sequence);
        all.into_iter()
            .map(|(k, e)| (k.clone(), e.response.clone()))
            .collect()
    }

    /// Entry and hit totals, logged when a session ends.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            total_hits: self
                .entries
                .values()
                .map(|e| u64::from(e.hit_count))
                .sum(),
        }
    }

    /// Return the number of entries currently in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Aggregate cache statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries currently in the cache.
    pub total_entries: usize,
    /// Cumulative number of cache hits across all entries.
    pub total_hits: u64,
}
