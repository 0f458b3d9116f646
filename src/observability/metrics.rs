//! Search metrics tracking.
//!
//! Counters are lock-free atomics shared through `Arc`, so a tracker can be
//! cloned into every handler.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Counters for search traffic.
#[derive(Debug, Clone)]
pub struct SearchMetrics {
    search_queries_total: Arc<AtomicU64>,
    empty_results_total: Arc<AtomicU64>,
    highlight_requests_total: Arc<AtomicU64>,
    cache_hits_total: Arc<AtomicU64>,
    cache_misses_total: Arc<AtomicU64>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub search_queries_total: u64,
    pub empty_results_total: u64,
    pub highlight_requests_total: u64,
    pub cache_hits_total: u64,
    pub cache_misses_total: u64,
    pub cache_hit_rate: f64,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self {
            search_queries_total: Arc::new(AtomicU64::new(0)),
            empty_results_total: Arc::new(AtomicU64::new(0)),
            highlight_requests_total: Arc::new(AtomicU64::new(0)),
            cache_hits_total: Arc::new(AtomicU64::new(0)),
            cache_misses_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a completed search.
    pub fn track_search_query(&self, duration_ms: u128, result_count: usize, from_cache: bool) {
        self.search_queries_total.fetch_add(1, Ordering::Relaxed);
        if result_count == 0 {
            self.empty_results_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::info!(
            duration_ms = duration_ms,
            result_count = result_count,
            from_cache = from_cache,
            "Search query completed"
        );
    }

    /// Track a result cache lookup.
    pub fn track_cache_access(&self, hit: bool) {
        if hit {
            self.cache_hits_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Result cache hit");
        } else {
            self.cache_misses_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Result cache miss");
        }
    }

    /// Track a standalone highlight request.
    pub fn track_highlight(&self, mark_count: usize) {
        self.highlight_requests_total.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(mark_count = mark_count, "Highlight completed");
    }

    pub fn search_queries_total(&self) -> u64 {
        self.search_queries_total.load(Ordering::Relaxed)
    }

    pub fn empty_results_total(&self) -> u64 {
        self.empty_results_total.load(Ordering::Relaxed)
    }

    pub fn highlight_requests_total(&self) -> u64 {
        self.highlight_requests_total.load(Ordering::Relaxed)
    }

    pub fn cache_hits_total(&self) -> u64 {
        self.cache_hits_total.load(Ordering::Relaxed)
    }

    pub fn cache_misses_total(&self) -> u64 {
        self.cache_misses_total.load(Ordering::Relaxed)
    }

    /// Get the cache hit rate (0.0 to 1.0).
    pub fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits_total() as f64;
        let total = (self.cache_hits_total() + self.cache_misses_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            search_queries_total: self.search_queries_total(),
            empty_results_total: self.empty_results_total(),
            highlight_requests_total: self.highlight_requests_total(),
            cache_hits_total: self.cache_hits_total(),
            cache_misses_total: self.cache_misses_total(),
            cache_hit_rate: self.cache_hit_rate(),
        }
    }

    /// Human-readable summary of all counters.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Search Queries: {}\n\
             Empty Results: {}\n\
             Highlight Requests: {}\n\
             Cache Hits: {}\n\
             Cache Misses: {}\n\
             Cache Hit Rate: {:.2}%",
            self.search_queries_total(),
            self.empty_results_total(),
            self.highlight_requests_total(),
            self.cache_hits_total(),
            self.cache_misses_total(),
            self.cache_hit_rate() * 100.0,
        )
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::debug!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}
