//! ArticleId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe identifier for an article.
///
/// Corpora written by hand tend to use integers, generated ones tend to use
/// strings, so both are accepted. Text identifiers are validated at
/// construction time and cannot be empty or blank.
///
/// # Example
///
/// ```
/// use article_search_mcp::domain::ArticleId;
///
/// let id = ArticleId::new("intro-to-rust").unwrap();
/// assert_eq!(id.to_string(), "intro-to-rust");
///
/// let id = ArticleId::from(7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArticleId {
    /// Integer identifier
    Number(i64),

    /// Text identifier (never empty)
    Text(String),
}

impl ArticleId {
    /// Create a text ArticleId, validating that it's not empty or blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` for `""` and
    /// `ValidationError::BlankId` for whitespace-only input.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if id.trim().is_empty() {
            return Err(ValidationError::BlankId(id));
        }
        Ok(Self::Text(id))
    }
}

impl From<i64> for ArticleId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl Serialize for ArticleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Number(n) => serializer.serialize_i64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Wire shape accepted for an id: a JSON number or a JSON string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawArticleId {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for ArticleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawArticleId::deserialize(deserializer)? {
            RawArticleId::Number(n) => Ok(ArticleId::Number(n)),
            RawArticleId::Text(s) => ArticleId::new(s).map_err(serde::de::Error::custom),
        }
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}
