//! Data models for searchable records.

pub mod article;

pub use article::Article;
