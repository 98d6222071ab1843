//! Article store port
//!
//! Where the article collection comes from. Implementations are provided by
//! adapters (JSON file on disk, another DevFeed instance over HTTP).

use async_trait::async_trait;

use crate::domain::entities::ArticleCollection;
use crate::error::StoreError;

/// Read-only source of the article collection
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Load the full collection.
    ///
    /// Returns `StoreError::NotFound` when the data has not been produced yet.
    async fn load(&self) -> Result<ArticleCollection, StoreError>;

    /// Human-readable location, used in logs
    fn describe(&self) -> String;
}
