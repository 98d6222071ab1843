//! Article service
//!
//! Loads the collection from a store with two error policies:
//! the API path propagates failures, the page path falls back to an empty
//! collection so the UI stays usable.

use std::sync::Arc;

use crate::app::article_filter::ArticleQuery;
use crate::domain::entities::ArticleCollection;
use crate::domain::ports::ArticleStore;
use crate::error::AppError;

/// Service for reading and filtering the article collection
pub struct ArticleService {
    store: Arc<dyn ArticleStore>,
}

impl ArticleService {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    /// Load and filter for the API. `total` reports the filtered count.
    pub async fn query(&self, query: &ArticleQuery) -> Result<ArticleCollection, AppError> {
        let collection = self.store.load().await?;
        let available = collection.articles.len();

        let result =
            ArticleCollection::new(collection.updated_at, query.apply(collection.articles));
        tracing::debug!(
            source = ?query.source,
            limit = ?query.limit,
            "Returning {} of {} articles",
            result.total,
            available
        );
        Ok(result)
    }

    /// Load for rendering. Any store error yields an empty collection.
    pub async fn load_or_empty(&self) -> ArticleCollection {
        match self.store.load().await {
            Ok(collection) => collection,
            Err(e) => {
                tracing::warn!(
                    "Error fetching articles from {}: {}",
                    self.store.describe(),
                    e
                );
                ArticleCollection::empty()
            }
        }
    }
}
