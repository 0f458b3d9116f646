//! Test fixtures and sample data shared by integration tests.

#![allow(dead_code)]

use article_search_mcp::{Article, ArticleId, Corpus};

/// The five-article sample corpus as a plain vector.
pub fn sample_articles() -> Vec<Article> {
    Corpus::sample().articles().to_vec()
}

/// Two articles where the second mentions "foo" twice.
pub fn foo_corpus() -> Vec<Article> {
    vec![
        Article::new(1, "A", "foo bar"),
        Article::new(2, "B", "foo foo bar"),
    ]
}

/// Articles whose text is hostile to naive HTML or regex handling.
pub fn hostile_articles() -> Vec<Article> {
    vec![
        Article::new(1, "<script>alert('x')</script>", "Tom & \"Jerry\""),
        Article::new(2, "Regex (a|b)*", "match .* or [a-z]+ or $^"),
        Article::new(3, "Plain", "nothing special"),
    ]
}

/// Ids of a result list, as display strings.
pub fn ids<'a>(ids: impl IntoIterator<Item = &'a ArticleId>) -> Vec<String> {
    ids.into_iter().map(|id| id.to_string()).collect()
}
