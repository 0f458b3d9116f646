//! Error types for the article search server.
//!
//! The search core is total and has no error type. These cover the shell:
//! configuration and corpus loading.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while loading a corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Corpus file could not be read
    #[error("Failed to read corpus file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Corpus file is not a valid JSON article array
    #[error("Corpus JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Two articles share an identifier
    #[error("Duplicate article id: {0}")]
    DuplicateId(String),

    /// An article failed domain validation
    #[error("Invalid article: {0}")]
    InvalidArticle(#[from] ValidationError),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CorpusError
pub type CorpusResult<T> = Result<T, CorpusError>;
