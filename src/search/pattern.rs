//! Compiled token pattern shared by match counting and highlighting.
//!
//! All tokens of a query are combined into one case-insensitive alternation,
//! ordered longest-first. The regex crate resolves alternations leftmost-first,
//! so at any position the longest token that matches there wins, whatever the
//! token order in the query.
//!
//! Extremely long queries can exceed the regex engine's compiled size limit.
//! In that case the pattern degrades to a literal scanner with the same
//! leftmost-longest semantics instead of failing.

use super::tokenizer::TokenSet;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

#[derive(Debug, Clone)]
enum Engine {
    Regex(Regex),
    Literal,
}

/// A case-insensitive, longest-first matcher for a set of tokens.
#[derive(Debug, Clone)]
pub struct TokenPattern {
    engine: Engine,
    /// Tokens as chars, ordered longest-first.
    tokens: Vec<Vec<char>>,
}

impl TokenPattern {
    /// Compile a pattern for `tokens`.
    ///
    /// Returns `None` for an empty token set: there is nothing to match.
    pub fn new(tokens: &TokenSet) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }

        let ordered = tokens.longest_first();
        let alternation = ordered
            .iter()
            .map(|t| t.escaped())
            .collect::<Vec<_>>()
            .join("|");

        let engine = match RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
        {
            Ok(re) => Engine::Regex(re),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    token_count = ordered.len(),
                    "Token pattern rejected by regex engine, using literal scanner"
                );
                Engine::Literal
            }
        };

        Some(Self {
            engine,
            tokens: literal_tokens(tokens),
        })
    }

    /// Build the literal scanner directly, bypassing the regex engine.
    pub(crate) fn literal(tokens: &TokenSet) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }
        Some(Self {
            engine: Engine::Literal,
            tokens: literal_tokens(tokens),
        })
    }

    /// Whether the regex engine backs this pattern.
    pub fn is_regex(&self) -> bool {
        matches!(self.engine, Engine::Regex(_))
    }

    /// Find the leftmost match starting at or after byte offset `start`.
    ///
    /// `start` must lie on a char boundary of `haystack`.
    pub fn find_at(&self, haystack: &str, start: usize) -> Option<Range<usize>> {
        match &self.engine {
            Engine::Regex(re) => re.find_at(haystack, start).map(|m| m.range()),
            Engine::Literal => find_literal_at(&self.tokens, haystack, start),
        }
    }

    /// Spans of every token matching exactly at byte offset `pos`, longest
    /// first.
    ///
    /// `pos` must lie on a char boundary of `haystack`.
    pub fn matches_at<'a>(
        &'a self,
        haystack: &'a str,
        pos: usize,
    ) -> impl Iterator<Item = Range<usize>> + 'a {
        self.tokens
            .iter()
            .filter_map(move |token| literal_match_end(haystack, pos, token).map(|end| pos..end))
    }

    /// Iterate over non-overlapping matches, left to right.
    pub fn find_iter<'p, 'h>(&'p self, haystack: &'h str) -> Matches<'p, 'h> {
        Matches {
            pattern: self,
            haystack,
            pos: 0,
        }
    }

    /// Number of non-overlapping matches in `haystack`.
    pub fn count(&self, haystack: &str) -> usize {
        self.find_iter(haystack).count()
    }
}

/// Iterator over non-overlapping matches of a [`TokenPattern`].
pub struct Matches<'p, 'h> {
    pattern: &'p TokenPattern,
    haystack: &'h str,
    pos: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.haystack.len() {
            return None;
        }
        let found = self.pattern.find_at(self.haystack, self.pos)?;
        // Tokens are never empty, so every match advances.
        self.pos = found.end;
        Some(found)
    }
}

fn literal_tokens(tokens: &TokenSet) -> Vec<Vec<char>> {
    tokens
        .longest_first()
        .into_iter()
        .map(|t| t.as_str().chars().collect())
        .collect()
}

fn find_literal_at(tokens: &[Vec<char>], haystack: &str, start: usize) -> Option<Range<usize>> {
    let rest = haystack.get(start..)?;
    for (offset, _) in rest.char_indices() {
        let pos = start + offset;
        for token in tokens {
            if let Some(end) = literal_match_end(haystack, pos, token) {
                return Some(pos..end);
            }
        }
    }
    None
}

fn literal_match_end(haystack: &str, pos: usize, token: &[char]) -> Option<usize> {
    let mut chars = haystack[pos..].chars();
    let mut consumed = 0;
    for &expected in token {
        let actual = chars.next()?;
        if !chars_eq_ignore_case(actual, expected) {
            return None;
        }
        consumed += actual.len_utf8();
    }
    Some(pos + consumed)
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}
