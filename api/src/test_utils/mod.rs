//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Handlers take `Arc<dyn ArticleStore>`, so router tests with axum-test
//! can swap these in for the file-backed store.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
