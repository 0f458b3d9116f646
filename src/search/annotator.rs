//! HTML-safe rendering with highlighted token occurrences.
//!
//! Text is escaped first and marked second. Markers are inserted only after
//! every reserved character of the input has been replaced, so the output can
//! be embedded in HTML as-is.
//!
//! Matching runs against the escaped text and entity escape sequences are
//! atomic: a match that would cut into an entity (token `amp` against
//! `&amp;`) gives way to the longest shorter token that fits at the same
//! position, or is skipped when none does. Consequently a token that is itself a reserved
//! character (`<`, `&`) never highlights anything, while a token spelled as
//! the entity (`&lt;`) highlights the whole entity. Such tokens still count
//! in [`evaluate`](super::evaluate), which works on raw text.

use super::pattern::TokenPattern;
use super::tokenizer::TokenSet;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Opening highlight marker.
pub const MARK_OPEN: &str = "<mark>";

/// Closing highlight marker.
pub const MARK_CLOSE: &str = "</mark>";

/// Escaped text that may contain highlight markers.
///
/// Safe to embed directly in HTML; callers must not escape it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnnotatedText(String);

impl AnnotatedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of highlighted spans.
    pub fn mark_count(&self) -> usize {
        self.0.matches(MARK_OPEN).count()
    }
}

impl fmt::Display for AnnotatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn entity_for(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#039;"),
        _ => None,
    }
}

/// Escaped text plus the byte spans of the entities written into it.
struct Escaped {
    text: String,
    entities: Vec<Range<usize>>,
}

impl Escaped {
    fn new(raw: &str) -> Self {
        let mut text = String::with_capacity(raw.len());
        let mut entities = Vec::new();
        for c in raw.chars() {
            match entity_for(c) {
                Some(entity) => {
                    let start = text.len();
                    text.push_str(entity);
                    entities.push(start..text.len());
                }
                None => text.push(c),
            }
        }
        Self { text, entities }
    }

    /// True if `span` covers only part of some entity.
    fn splits_entity(&self, span: &Range<usize>) -> bool {
        let first = self.entities.partition_point(|e| e.end <= span.start);
        self.entities[first..]
            .iter()
            .take_while(|e| e.start < span.end)
            .any(|e| e.start < span.start || e.end > span.end)
    }
}

/// Replace `& < > " '` with their HTML entities in a single pass.
pub fn escape_html(text: &str) -> String {
    Escaped::new(text).text
}

/// Escape `text` and wrap every token occurrence in `<mark>` markers.
///
/// With an empty token set the escaped text is returned unchanged.
///
/// # Example
///
/// ```
/// use article_search_mcp::search::{render, tokenize};
///
/// let html = render("React Search Tutorial", &tokenize("search"));
/// assert_eq!(html.as_str(), "React <mark>Search</mark> Tutorial");
/// ```
pub fn render(text: &str, tokens: &TokenSet) -> AnnotatedText {
    render_with(text, TokenPattern::new(tokens).as_ref())
}

/// Like [`render`], reusing an already compiled pattern.
pub fn render_with(text: &str, pattern: Option<&TokenPattern>) -> AnnotatedText {
    let escaped = Escaped::new(text);
    let Some(pattern) = pattern else {
        return AnnotatedText(escaped.text);
    };

    let haystack = escaped.text.as_str();
    let mut out = String::with_capacity(haystack.len() + 16);
    let mut copied = 0;
    let mut pos = 0;

    while let Some(found) = pattern.find_at(haystack, pos) {
        // A shorter token at the same start may still fit around the entity.
        let span = if escaped.splits_entity(&found) {
            pattern
                .matches_at(haystack, found.start)
                .find(|span| !escaped.splits_entity(span))
        } else {
            Some(found.clone())
        };
        let Some(span) = span else {
            pos = next_char_boundary(haystack, found.start);
            continue;
        };
        out.push_str(&haystack[copied..span.start]);
        out.push_str(MARK_OPEN);
        out.push_str(&haystack[span.clone()]);
        out.push_str(MARK_CLOSE);
        copied = span.end;
        pos = span.end;
    }
    out.push_str(&haystack[copied..]);

    AnnotatedText(out)
}

fn next_char_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(text.len(), |c| at + c.len_utf8())
}
