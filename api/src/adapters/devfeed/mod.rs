//! DevFeed API adapter
//!
//! Reads the collection from another DevFeed instance's `/api/articles`.

pub mod client;

pub use client::HttpArticleStore;
