//! Mock implementations of port traits
//!
//! In-memory article stores that can be configured for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::ArticleCollection;
use crate::domain::ports::ArticleStore;
use crate::error::StoreError;

// ============================================================================
// In-Memory Article Store
// ============================================================================

pub struct InMemoryArticleStore {
    collection: Arc<RwLock<ArticleCollection>>,
    loads: AtomicUsize,
}

impl InMemoryArticleStore {
    pub fn new(collection: ArticleCollection) -> Self {
        Self {
            collection: Arc::new(RwLock::new(collection)),
            loads: AtomicUsize::new(0),
        }
    }

    /// Replace the served collection
    pub fn set(&self, collection: ArticleCollection) {
        *self.collection.write().unwrap() = collection;
    }

    /// Number of times `load` has been called
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn load(&self) -> Result<ArticleCollection, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.collection.read().unwrap().clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// ============================================================================
// Failing Article Store
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Failure {
    NotFound,
    Corrupt,
}

/// Store that always fails the same way
pub struct FailingArticleStore {
    failure: Failure,
}

impl FailingArticleStore {
    /// Behaves like a data file that was never written
    pub fn not_found() -> Self {
        Self {
            failure: Failure::NotFound,
        }
    }

    /// Behaves like a data file holding invalid JSON
    pub fn corrupt() -> Self {
        Self {
            failure: Failure::Corrupt,
        }
    }
}

#[async_trait]
impl ArticleStore for FailingArticleStore {
    async fn load(&self) -> Result<ArticleCollection, StoreError> {
        match self.failure {
            Failure::NotFound => Err(StoreError::NotFound("memory://articles.json".to_string())),
            Failure::Corrupt => {
                let err = serde_json::from_str::<ArticleCollection>("{ not json")
                    .expect_err("invalid JSON must fail to parse");
                Err(StoreError::Parse(err))
            }
        }
    }

    fn describe(&self) -> String {
        format!("failing store ({:?})", self.failure)
    }
}
