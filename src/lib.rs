//! Article search - keyword search with safe highlighting, served over MCP.
//!
//! Given a small corpus of articles and a free-text query, the library finds
//! the matching articles, ranks them by how often the query's tokens occur,
//! and renders titles and bodies as HTML-escaped text with every occurrence
//! wrapped in `<mark>` tags.
//!
//! # Architecture
//!
//! - **search**: the pure core (tokenizer, token pattern, matcher/ranker, annotator)
//! - **domain**: validated value objects such as `ArticleId`
//! - **models**: the `Article` record
//! - **corpus**: versioned article lists, built-in sample and JSON loading
//! - **cache**: result memoization keyed by corpus version and query
//! - **observability**: search metrics and timers
//! - **tools**: search and highlight operations for the server
//! - **server**: MCP protocol server
//! - **config** / **error**: environment configuration and error types
//!
//! # Example
//!
//! ```
//! use article_search_mcp::search::{evaluate, render, tokenize};
//! use article_search_mcp::Article;
//!
//! let corpus = vec![
//!     Article::new(1, "A", "foo bar"),
//!     Article::new(2, "B", "foo foo bar"),
//! ];
//! let results = evaluate(&corpus, "foo");
//! assert_eq!(results[0].match_count, 2);
//!
//! let html = render(&results[0].article.body, &tokenize("foo"));
//! assert_eq!(html.as_str(), "<mark>foo</mark> <mark>foo</mark> bar");
//! ```

pub mod cache;
pub mod config;
pub mod corpus;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod search;
pub mod server;
pub mod tools;

pub use cache::{CacheKey, ResultCache};
pub use config::Config;
pub use corpus::Corpus;
pub use domain::{ArticleId, ValidationError};
pub use error::{ConfigError, CorpusError};
pub use models::Article;
pub use observability::{MetricsSnapshot, SearchMetrics};
pub use search::{
    escape_html, evaluate, render, tokenize, AnnotatedText, RankedArticle, TokenPattern, TokenSet,
};
pub use server::ArticleSearchServer;
pub use tools::{RenderedArticle, SearchResponse, SearchTools};
