//! Keyword search core: tokenizing, ranking and highlighting.
//!
//! Every function here is pure and synchronous. A query flows through
//! [`tokenize`], the articles are filtered and ranked by [`evaluate`], and
//! the fields of each surviving article are rendered with [`render`].
//! Counting and highlighting share one [`TokenPattern`], so both resolve
//! overlapping tokens longest-first.

pub mod annotator;
pub mod matcher;
pub mod pattern;
pub mod tokenizer;

pub use annotator::{escape_html, render, render_with, AnnotatedText, MARK_CLOSE, MARK_OPEN};
pub use matcher::{
    combined_text, count_matches, evaluate, evaluate_with, RankedArticle, FIELD_SEPARATOR,
};
pub use pattern::TokenPattern;
pub use tokenizer::{tokenize, Token, TokenSet};
