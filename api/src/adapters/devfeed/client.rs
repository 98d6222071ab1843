//! DevFeed API client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::domain::entities::ArticleCollection;
use crate::domain::ports::ArticleStore;
use crate::error::StoreError;

/// Article store that fetches `GET {base_url}/api/articles`
pub struct HttpArticleStore {
    http: Client,
    base_url: String,
}

impl HttpArticleStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn articles_url(&self) -> String {
        format!("{}/api/articles", self.base_url)
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<ArticleCollection, StoreError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))
        } else if status == StatusCode::NOT_FOUND {
            Err(StoreError::NotFound(self.articles_url()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(StoreError::Upstream {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ArticleStore for HttpArticleStore {
    async fn load(&self) -> Result<ArticleCollection, StoreError> {
        let response = self
            .http
            .get(self.articles_url())
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        self.handle_response(response).await
    }

    fn describe(&self) -> String {
        format!("api {}", self.articles_url())
    }
}
