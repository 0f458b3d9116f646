//! Domain value objects.
//!
//! Type-safe wrappers that validate at construction time, so an invalid
//! article identifier can never reach the search core.

pub mod article_id;
pub mod errors;

pub use article_id::ArticleId;
pub use errors::ValidationError;
