//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod devfeed;
pub mod json_file;

pub use devfeed::HttpArticleStore;
pub use json_file::JsonFileArticleStore;
