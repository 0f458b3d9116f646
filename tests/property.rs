use proptest::prelude::*;

use article_search_mcp::search::{
    count_matches, escape_html, evaluate, render, tokenize, MARK_CLOSE, MARK_OPEN,
};
use article_search_mcp::Article;
use std::ops::Range;

fn arb_corpus() -> impl Strategy<Value = Vec<Article>> {
    prop::collection::vec(("[a-zA-Z <>&]{0,20}", "[a-zA-Z .*&\"']{0,60}"), 0..8).prop_map(
        |fields| {
            fields
                .into_iter()
                .enumerate()
                .map(|(i, (title, body))| Article::new(i as i64 + 1, title, body))
                .collect()
        },
    )
}

fn arb_query() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z.*&<]{1,4}", 0..4).prop_map(|tokens| tokens.join(" "))
}

fn strip_marks(html: &str) -> String {
    html.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

/// Byte spans of `&...;` entities in escaped text.
fn entity_spans(escaped: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some(offset) = escaped[pos..].find('&') {
        let start = pos + offset;
        let end = start + escaped[start..].find(';').map_or(1, |i| i + 1);
        spans.push(start..end);
        pos = end;
    }
    spans
}

/// Highlighted spans, as byte ranges into the output with markers removed.
fn mark_spans(html: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut rest = html;
    let mut offset = 0;
    while let Some(open) = rest.find(MARK_OPEN) {
        let after_open = &rest[open + MARK_OPEN.len()..];
        let close = after_open.find(MARK_CLOSE).unwrap();
        let start = offset + open;
        spans.push(start..start + close);
        offset = start + close;
        rest = &after_open[close + MARK_CLOSE.len()..];
    }
    spans
}

fn splits(span: &Range<usize>, entities: &[Range<usize>]) -> bool {
    entities.iter().any(|e| {
        e.start < span.end && span.start < e.end && (e.start < span.start || e.end > span.end)
    })
}

/// Position-by-position highlighter over ASCII input: at each offset mark
/// the longest token that fits without cutting an entity, else copy a byte.
fn naive_render(text: &str, query: &str) -> String {
    let escaped = escape_html(text);
    let entities = entity_spans(&escaped);
    let mut tokens: Vec<&str> = query.split_whitespace().collect();
    tokens.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut out = String::new();
    let mut pos = 0;
    while pos < escaped.len() {
        let hit = tokens.iter().find_map(|token| {
            let span = pos..pos + token.len();
            let word = escaped.get(span.clone())?;
            (word.eq_ignore_ascii_case(token) && !splits(&span, &entities)).then_some(span)
        });
        match hit {
            Some(span) => {
                out.push_str(MARK_OPEN);
                out.push_str(&escaped[span.clone()]);
                out.push_str(MARK_CLOSE);
                pos = span.end;
            }
            None => {
                out.push_str(&escaped[pos..pos + 1]);
                pos += 1;
            }
        }
    }
    out
}

proptest! {
    // =========================================================================
    // Ranking
    // =========================================================================

    #[test]
    fn test_evaluate_is_deterministic(corpus in arb_corpus(), query in arb_query()) {
        prop_assert_eq!(evaluate(&corpus, &query), evaluate(&corpus, &query));
    }

    #[test]
    fn test_results_are_ranked_subset(corpus in arb_corpus(), query in arb_query()) {
        let results = evaluate(&corpus, &query);

        prop_assert!(results.len() <= corpus.len());
        for (i, result) in results.iter().enumerate() {
            prop_assert!(corpus.contains(&result.article));
            prop_assert_eq!(result.rank, i + 1);
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].match_count >= pair[1].match_count);
            if pair[0].match_count == pair[1].match_count {
                let first = corpus.iter().position(|a| a == &pair[0].article);
                let second = corpus.iter().position(|a| a == &pair[1].article);
                prop_assert!(first < second);
            }
        }
    }

    #[test]
    fn test_nonempty_query_only_returns_matches(corpus in arb_corpus(), query in arb_query()) {
        let results = evaluate(&corpus, &query);
        if tokenize(&query).is_empty() {
            prop_assert_eq!(results.len(), corpus.len());
        } else {
            prop_assert!(results.iter().all(|r| r.is_match && r.match_count >= 1));
        }
    }

    // =========================================================================
    // Annotation Safety
    // =========================================================================

    #[test]
    fn test_render_never_emits_raw_markup(text in ".{0,80}", query in arb_query()) {
        let html = render(&text, &tokenize(&query));
        let stripped = strip_marks(html.as_str());

        prop_assert_eq!(&stripped, &escape_html(&text));
        prop_assert!(!stripped.contains('<'));
        prop_assert!(!stripped.contains('>'));
        prop_assert!(!stripped.contains('"'));
        prop_assert!(!stripped.contains('\''));
    }

    #[test]
    fn test_render_without_tokens_is_escape(text in ".{0,80}") {
        let rendered = render(&text, &tokenize(""));
        prop_assert_eq!(rendered.as_str(), escape_html(&text));
    }

    #[test]
    fn test_marks_agree_with_counts_on_plain_text(
        text in "[a-zA-Z ]{0,60}",
        query in prop::collection::vec("[a-z]{1,4}", 1..4).prop_map(|t| t.join(" "))
    ) {
        let html = render(&text, &tokenize(&query));
        prop_assert_eq!(html.mark_count(), count_matches(&text, &query));
    }

    #[test]
    fn test_marks_never_cut_entities(
        text in "[abx&<>\"' ]{0,40}",
        query in prop::collection::vec("[abxlmpt&;]{1,4}", 1..4).prop_map(|t| t.join(" "))
    ) {
        let html = render(&text, &tokenize(&query));
        let stripped = strip_marks(html.as_str());
        let entities = entity_spans(&stripped);

        for span in mark_spans(html.as_str()) {
            prop_assert!(
                !splits(&span, &entities),
                "mark {:?} cuts an entity in {:?}",
                span,
                stripped
            );
        }
    }

    #[test]
    fn test_render_marks_every_clean_match(
        text in "[abx&<>\"' ]{0,40}",
        query in prop::collection::vec("[abxlmpt&;]{1,4}", 1..4).prop_map(|t| t.join(" "))
    ) {
        let html = render(&text, &tokenize(&query));
        prop_assert_eq!(html.as_str(), naive_render(&text, &query));
    }

    #[test]
    fn test_plain_letter_tokens_are_all_marked(
        text in "[abx&<>\"' ]{0,40}",
        query in prop::collection::vec("[abx]{1,3}", 1..4).prop_map(|t| t.join(" "))
    ) {
        // Letter-only tokens never depend on entities, so every counted match is shown
        let html = render(&text, &tokenize(&query));
        prop_assert_eq!(html.mark_count(), count_matches(&text, &query));
    }
}
