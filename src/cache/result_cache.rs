//! Memoization of search results keyed by corpus version and query.
//!
//! Search results are pure functions of `(corpus, query)`, so a cached value
//! is exactly what a recomputation would produce. Entries expire after a TTL
//! and the cache is bounded so a stream of distinct queries cannot grow it
//! without limit.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Default upper bound on stored entries.
pub const DEFAULT_MAX_ENTRIES: usize = 1024;

/// Identifies one search evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Version of the corpus that was searched
    pub corpus_version: u64,

    /// Raw query string, untrimmed
    pub query: String,
}

impl CacheKey {
    pub fn new(corpus_version: u64, query: impl Into<String>) -> Self {
        Self {
            corpus_version,
            query: query.into(),
        }
    }
}

#[derive(Debug)]
struct CacheEntry<V> {
    value: Arc<V>,
    inserted_at: Instant,
}

/// A thread-safe, TTL-bounded result cache.
///
/// Clones share the same storage. A zero TTL disables the cache: inserts
/// are dropped and lookups always miss.
pub struct ResultCache<V> {
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry<V>>>>,
    ttl: Duration,
    max_entries: usize,
}

impl<V> Clone for ResultCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            ttl: self.ttl,
            max_entries: self.max_entries,
        }
    }
}

impl<V> ResultCache<V> {
    /// Create a cache with the specified TTL in seconds.
    pub fn new(ttl_secs: u64) -> Self {
        Self::with_ttl(Duration::from_secs(ttl_secs))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }

    /// Override the entry bound (at least 1).
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Store a value, evicting expired entries first when full.
    ///
    /// If the cache is still full after eviction it is cleared.
    pub fn insert(&self, key: CacheKey, value: Arc<V>) {
        if !self.is_enabled() {
            return;
        }

        if let Ok(mut entries) = self.entries.write() {
            if !entries.contains_key(&key) && entries.len() >= self.max_entries {
                let now = Instant::now();
                entries.retain(|_, entry| now.duration_since(entry.inserted_at) < self.ttl);
                if entries.len() >= self.max_entries {
                    tracing::debug!(entries = entries.len(), "Result cache full, clearing");
                    entries.clear();
                }
            }
            entries.insert(
                key,
                CacheEntry {
                    value,
                    inserted_at: Instant::now(),
                },
            );
        }
    }

    /// Get a value if present and not expired.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<V>> {
        let now = Instant::now();
        let entries = self.entries.read().ok()?;
        entries
            .get(key)
            .filter(|entry| now.duration_since(entry.inserted_at) < self.ttl)
            .map(|entry| Arc::clone(&entry.value))
    }

    /// Drop every entry computed against a corpus other than `corpus_version`.
    pub fn retain_version(&self, corpus_version: u64) {
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|key, _| key.corpus_version == corpus_version);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Number of stored entries (including expired ones).
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<V> std::fmt::Debug for ResultCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("ttl", &self.ttl)
            .field("max_entries", &self.max_entries)
            .field("entries", &self.len())
            .finish()
    }
}
