//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating article data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided article ID is empty.
    EmptyId,

    /// The provided article ID is made of whitespace only.
    BlankId(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Article ID cannot be empty"),
            Self::BlankId(id) => write!(f, "Article ID cannot be blank: {:?}", id),
        }
    }
}

impl std::error::Error for ValidationError {}
