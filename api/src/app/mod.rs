//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod article_filter;
pub mod article_service;

pub use article_filter::{tab_counts, ArticleQuery, ListFilter};
pub use article_service::ArticleService;
