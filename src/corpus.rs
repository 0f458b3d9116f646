//! Article corpus ownership and loading.
//!
//! A [`Corpus`] is an immutable, cheaply cloneable list of articles with a
//! process-unique version number. The version lets result caches tell two
//! corpora apart without comparing their contents.

use crate::domain::ArticleId;
use crate::error::{CorpusError, CorpusResult};
use crate::models::Article;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

static SAMPLE_ARTICLES: Lazy<Vec<Article>> = Lazy::new(|| {
    vec![
        Article::new(
            1,
            "How JavaScript Works",
            "JavaScript is a single-threaded language that uses an event loop to handle asynchronous operations. Understanding callbacks, promises, and async/await is key.",
        ),
        Article::new(
            2,
            "React Search Tutorial",
            "This tutorial shows how to implement a text search component that highlights matched keywords in results. It covers debouncing, filtering, and highlighting techniques.",
        ),
        Article::new(
            3,
            "CSS Tricks for Clean UI",
            "Simple CSS patterns make interfaces more readable. Use spacing, accessible colors, and readable font sizes to improve UX.",
        ),
        Article::new(
            4,
            "Async Patterns in Node.js",
            "Explaining event-driven programming: callbacks vs streams vs promises and how they shape server-side code.",
        ),
        Article::new(
            5,
            "Full Text Search Techniques",
            "Different search strategies: simple substring search, tokenization, stemming, and when to use an indexed engine like ElasticSearch.",
        ),
    ]
});

/// An immutable, versioned sequence of articles.
#[derive(Debug, Clone)]
pub struct Corpus {
    articles: Arc<Vec<Article>>,
    version: u64,
}

impl Corpus {
    /// Create a corpus, validating ids.
    ///
    /// # Errors
    ///
    /// - `CorpusError::InvalidArticle` for an empty or blank text id
    /// - `CorpusError::DuplicateId` when two articles share an id
    pub fn new(articles: Vec<Article>) -> CorpusResult<Self> {
        let mut seen: HashSet<&ArticleId> = HashSet::with_capacity(articles.len());
        for article in &articles {
            if let ArticleId::Text(text) = &article.id {
                ArticleId::new(text.as_str())?;
            }
            if !seen.insert(&article.id) {
                return Err(CorpusError::DuplicateId(article.id.to_string()));
            }
        }

        Ok(Self::from_validated(articles))
    }

    fn from_validated(articles: Vec<Article>) -> Self {
        Self {
            articles: Arc::new(articles),
            version: NEXT_VERSION.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The built-in five-article sample corpus.
    pub fn sample() -> Self {
        Self::from_validated(SAMPLE_ARTICLES.clone())
    }

    /// Parse a corpus from a JSON array of `{"id", "title", "body"}` objects.
    pub fn from_json_str(json: &str) -> CorpusResult<Self> {
        let articles: Vec<Article> = serde_json::from_str(json)?;
        Self::new(articles)
    }

    /// Load a corpus from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CorpusResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let corpus = Self::from_json_str(&json)?;

        tracing::info!(
            path = %path.display(),
            articles = corpus.len(),
            "Corpus loaded"
        );

        Ok(corpus)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Process-unique version of this corpus instance.
    pub fn version(&self) -> u64 {
        self.version
    }
}
