//! Result caching for the search shell.
//!
//! The search core recomputes everything per call; memoization lives here,
//! outside of it.

pub mod result_cache;

pub use result_cache::{CacheKey, ResultCache, DEFAULT_MAX_ENTRIES};
