//! Search tools: ranked, highlighted search over the loaded corpus.
//!
//! Wraps the pure search core with the pieces a running server needs: corpus
//! ownership, result memoization and metrics.

use crate::cache::{CacheKey, ResultCache};
use crate::corpus::Corpus;
use crate::domain::ArticleId;
use crate::observability::{SearchMetrics, Timer};
use crate::search::{evaluate_with, render_with, tokenize, AnnotatedText, TokenPattern};
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Shown in place of results when a query matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No articles match your search.";

/// One search hit, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedArticle {
    pub id: ArticleId,

    /// Escaped, highlighted title
    pub title: AnnotatedText,

    /// Escaped, highlighted body
    pub body: AnnotatedText,

    pub match_count: usize,

    /// 1-based position in the result list
    pub rank: usize,
}

/// Response from a search with display metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    /// The query as received
    pub query: String,

    /// Number of results returned
    pub shown: usize,

    /// Number of articles in the corpus
    pub total: usize,

    /// e.g. `Showing 2 of 5 articles for query "search"`
    pub summary: String,

    /// Set when a non-empty query matched nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,

    pub results: Vec<RenderedArticle>,

    /// Whether the response came from the result cache
    pub from_cache: bool,
}

/// Search tools for querying and highlighting articles.
#[derive(Clone)]
pub struct SearchTools {
    corpus: Arc<RwLock<Corpus>>,
    cache: ResultCache<SearchResponse>,
    metrics: SearchMetrics,
    cache_ttl_secs: u64,
}

impl SearchTools {
    /// Create search tools over `corpus`.
    ///
    /// # Arguments
    /// * `corpus` - Articles to search
    /// * `cache_ttl_secs` - Result cache time-to-live in seconds (0 disables it)
    pub fn new(corpus: Corpus, cache_ttl_secs: u64) -> Self {
        Self {
            corpus: Arc::new(RwLock::new(corpus)),
            cache: ResultCache::new(cache_ttl_secs),
            metrics: SearchMetrics::new(),
            cache_ttl_secs,
        }
    }

    /// Search the corpus and render every hit.
    ///
    /// An empty query lists the whole corpus unhighlighted. Identical queries
    /// against the same corpus are served from the result cache.
    pub fn search(&self, query: &str) -> SearchResponse {
        let timer = Timer::new("search");
        let corpus = self.corpus();
        let key = CacheKey::new(corpus.version(), query);

        if let Some(cached) = self.cache.get(&key) {
            self.metrics.track_cache_access(true);
            let mut response = (*cached).clone();
            response.from_cache = true;
            self.metrics
                .track_search_query(timer.finish(), response.shown, true);
            return response;
        }
        self.metrics.track_cache_access(false);

        let tokens = tokenize(query);
        tracing::debug!(
            query_len = query.len(),
            token_count = tokens.len(),
            corpus_version = corpus.version(),
            "Evaluating search"
        );

        let pattern = TokenPattern::new(&tokens);
        let results: Vec<RenderedArticle> = evaluate_with(corpus.articles(), pattern.as_ref())
            .into_iter()
            .map(|ranked| RenderedArticle {
                id: ranked.article.id.clone(),
                title: render_with(&ranked.article.title, pattern.as_ref()),
                body: render_with(&ranked.article.body, pattern.as_ref()),
                match_count: ranked.match_count,
                rank: ranked.rank,
            })
            .collect();

        let response = build_response(query, corpus.len(), results, tokens.is_empty());
        self.cache.insert(key, Arc::new(response.clone()));
        self.metrics
            .track_search_query(timer.finish(), response.shown, false);

        response
    }

    /// Escape and highlight arbitrary text against a query.
    pub fn highlight(&self, text: &str, query: &str) -> AnnotatedText {
        let annotated = render_with(text, TokenPattern::new(&tokenize(query)).as_ref());
        self.metrics.track_highlight(annotated.mark_count());
        annotated
    }

    /// A cheap handle to the current corpus.
    pub fn corpus(&self) -> Corpus {
        match self.corpus.read() {
            Ok(corpus) => corpus.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Swap in a new corpus; results cached for older corpora are dropped.
    pub fn replace_corpus(&self, corpus: Corpus) {
        let version = corpus.version();
        let articles = corpus.len();
        match self.corpus.write() {
            Ok(mut current) => *current = corpus,
            Err(poisoned) => *poisoned.into_inner() = corpus,
        }
        self.cache.retain_version(version);
        tracing::info!(
            corpus_version = version,
            articles = articles,
            "Corpus replaced"
        );
    }

    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Get the current cache TTL in seconds.
    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs
    }
}

fn build_response(
    query: &str,
    total: usize,
    results: Vec<RenderedArticle>,
    unfiltered: bool,
) -> SearchResponse {
    let shown = results.len();
    let summary = if unfiltered {
        format!("Showing {} of {} articles", shown, total)
    } else {
        format!(
            "Showing {} of {} articles for query \"{}\"",
            shown,
            total,
            query.trim()
        )
    };
    let empty_message = (!unfiltered && results.is_empty()).then(|| NO_RESULTS_MESSAGE.to_string());

    SearchResponse {
        query: query.to_string(),
        shown,
        total,
        summary,
        empty_message,
        results,
        from_cache: false,
    }
}
