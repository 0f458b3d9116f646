//! Article model: the record type the search core works over.

use crate::domain::ArticleId;
use serde::{Deserialize, Serialize};

/// An immutable text record with a title and a body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Unique identifier within a corpus
    pub id: ArticleId,

    /// Article title (may be empty)
    #[serde(default)]
    pub title: String,

    /// Article body (may be empty)
    #[serde(default)]
    pub body: String,
}

impl Article {
    /// Create a new article.
    pub fn new(id: impl Into<ArticleId>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}
