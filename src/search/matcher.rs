//! Match counting and ranking over an article corpus.

use super::pattern::TokenPattern;
use super::tokenizer::tokenize;
use crate::models::Article;
use serde::Serialize;

/// Inserted between title and body so no token can span the two fields.
/// Tokens never contain whitespace.
pub const FIELD_SEPARATOR: char = '\n';

/// An article together with its match outcome for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedArticle {
    /// The matched article
    pub article: Article,

    /// Whether the article passed the filter (always true for an empty query)
    pub is_match: bool,

    /// Token occurrences across title and body (0 for an empty query)
    pub match_count: usize,

    /// 1-based position in the result list
    pub rank: usize,
}

/// Title and body joined with [`FIELD_SEPARATOR`].
pub fn combined_text(article: &Article) -> String {
    let mut combined = String::with_capacity(article.title.len() + article.body.len() + 1);
    combined.push_str(&article.title);
    combined.push(FIELD_SEPARATOR);
    combined.push_str(&article.body);
    combined
}

/// Count non-overlapping, case-insensitive occurrences of any query token.
///
/// Returns 0 for an empty query.
pub fn count_matches(text: &str, query: &str) -> usize {
    TokenPattern::new(&tokenize(query)).map_or(0, |pattern| pattern.count(text))
}

/// Filter and rank `corpus` against `query`.
///
/// An empty (or whitespace-only) query disables filtering: every article is
/// returned in corpus order with a match count of 0. Otherwise only articles
/// with at least one token occurrence survive, sorted by match count
/// descending; ties keep corpus order.
pub fn evaluate(corpus: &[Article], query: &str) -> Vec<RankedArticle> {
    evaluate_with(corpus, TokenPattern::new(&tokenize(query)).as_ref())
}

/// Like [`evaluate`], reusing an already compiled pattern.
///
/// `None` stands for an empty query.
pub fn evaluate_with(corpus: &[Article], pattern: Option<&TokenPattern>) -> Vec<RankedArticle> {
    let Some(pattern) = pattern else {
        return corpus
            .iter()
            .enumerate()
            .map(|(i, article)| RankedArticle {
                article: article.clone(),
                is_match: true,
                match_count: 0,
                rank: i + 1,
            })
            .collect();
    };

    let mut results: Vec<RankedArticle> = corpus
        .iter()
        .filter_map(|article| {
            let match_count = pattern.count(&combined_text(article));
            (match_count > 0).then(|| RankedArticle {
                article: article.clone(),
                is_match: true,
                match_count,
                rank: 0,
            })
        })
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.match_count.cmp(&a.match_count));

    for (i, result) in results.iter_mut().enumerate() {
        result.rank = i + 1;
    }

    results
}
