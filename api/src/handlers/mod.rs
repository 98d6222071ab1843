//! HTTP handlers
//!
//! Axum request handlers for the API endpoints and the article page.

pub mod articles;
pub mod page;

pub use articles::list_articles;
pub use page::index;

/// Query pairs in request order. Repeated keys are kept, not rejected.
pub type QueryPairs = Vec<(String, String)>;

/// First value for `key`, like `URLSearchParams.get`
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
