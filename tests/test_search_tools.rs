//! Integration tests for the server-facing search tools.
//!
//! These tests validate:
//! - Rendered search responses over a loaded corpus
//! - Result caching keyed by corpus version
//! - Corpus loading from JSON files
//! - Metrics bookkeeping

use article_search_mcp::tools::NO_RESULTS_MESSAGE;
use article_search_mcp::{ArticleSearchServer, Corpus, CorpusError, SearchTools};
use std::io::Write;

mod fixtures;
use fixtures::*;

fn sample_tools() -> SearchTools {
    SearchTools::new(Corpus::sample(), 300)
}

#[test]
fn test_search_ranks_and_highlights_sample() {
    let response = sample_tools().search("search");

    assert_eq!(response.shown, 2);
    assert_eq!(response.total, 5);
    assert_eq!(
        response.summary,
        "Showing 2 of 5 articles for query \"search\""
    );
    assert_eq!(ids(response.results.iter().map(|r| &r.id)), vec!["5", "2"]);
    assert_eq!(
        response.results[0].title.as_str(),
        "Full Text <mark>Search</mark> Techniques"
    );
    assert_eq!(response.results[0].body.mark_count(), 3);
    assert_eq!(
        response.results[1].title.as_str(),
        "React <mark>Search</mark> Tutorial"
    );
    assert_eq!(
        response.results.iter().map(|r| r.rank).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn test_empty_query_lists_unhighlighted_corpus() {
    let response = sample_tools().search("");

    assert_eq!(response.shown, 5);
    assert_eq!(response.summary, "Showing 5 of 5 articles");
    assert!(response.empty_message.is_none());
    assert!(response.results.iter().all(|r| r.title.mark_count() == 0));
    assert!(response.results.iter().all(|r| r.match_count == 0));
}

#[test]
fn test_no_match_sets_empty_message() {
    let response = sample_tools().search("kubernetes");

    assert!(response.results.is_empty());
    assert_eq!(response.empty_message.as_deref(), Some(NO_RESULTS_MESSAGE));
    assert_eq!(
        response.summary,
        "Showing 0 of 5 articles for query \"kubernetes\""
    );
}

#[test]
fn test_hostile_corpus_is_escaped() {
    let corpus = Corpus::new(hostile_articles()).unwrap();
    let tools = SearchTools::new(corpus, 300);

    let response = tools.search("script");
    assert_eq!(response.shown, 1);
    let hit = &response.results[0];
    assert!(!hit.title.as_str().contains("<script>"));
    assert!(hit.title.as_str().starts_with("&lt;<mark>script</mark>&gt;"));
    assert_eq!(hit.body.as_str(), "Tom &amp; &quot;Jerry&quot;");
}

#[test]
fn test_repeat_search_is_cached_and_identical() {
    let tools = sample_tools();

    let first = tools.search("promises");
    let second = tools.search("promises");

    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(first.results, second.results);
    assert_eq!(first.summary, second.summary);

    let metrics = tools.metrics().snapshot();
    assert_eq!(metrics.search_queries_total, 2);
    assert_eq!(metrics.cache_hits_total, 1);
}

#[test]
fn test_replacing_corpus_bypasses_stale_results() {
    let tools = sample_tools();
    assert_eq!(tools.search("foo").shown, 0);

    tools.replace_corpus(Corpus::new(foo_corpus()).unwrap());

    let response = tools.search("foo");
    assert!(!response.from_cache);
    assert_eq!(ids(response.results.iter().map(|r| &r.id)), vec!["2", "1"]);
}

#[test]
fn test_load_corpus_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "a", "title": "Alpha", "body": "foo bar"}},
            {{"id": "b", "title": "Beta", "body": "foo foo bar"}}
        ]"#
    )
    .unwrap();

    let corpus = Corpus::load(file.path()).unwrap();
    let response = SearchTools::new(corpus, 0).search("FOO");

    assert_eq!(ids(response.results.iter().map(|r| &r.id)), vec!["b", "a"]);
    assert_eq!(response.results[0].body.as_str(), "<mark>foo</mark> <mark>foo</mark> bar");
}

#[test]
fn test_load_corpus_rejects_duplicates() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"id": 1}}, {{"id": 1}}]"#).unwrap();

    assert!(matches!(
        Corpus::load(file.path()),
        Err(CorpusError::DuplicateId(_))
    ));
}

#[test]
fn test_highlight_text_tool_path() {
    let server = ArticleSearchServer::new(sample_tools());
    let html = server
        .search_tools()
        .highlight("Use <b>CSS</b> & grids", "css grids");

    assert_eq!(
        html.as_str(),
        "Use &lt;b&gt;<mark>CSS</mark>&lt;/b&gt; &amp; <mark>grids</mark>"
    );
    assert_eq!(server.search_tools().metrics().highlight_requests_total(), 1);
}
