//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod article;

pub use article::{parse_timestamp, Article, ArticleCollection, Source, SourceTab};
