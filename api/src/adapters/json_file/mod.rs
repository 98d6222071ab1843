//! JSON file adapter
//!
//! Reads the collection the scraper writes to disk.

pub mod store;

pub use store::JsonFileArticleStore;
