//! Tools exposed by the article search server.
//!
//! - **Search**: ranked, highlighted keyword search with result caching

pub mod search;

pub use search::{RenderedArticle, SearchResponse, SearchTools, NO_RESULTS_MESSAGE};
