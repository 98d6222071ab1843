//! Article store backed by a JSON file

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entities::ArticleCollection;
use crate::domain::ports::ArticleStore;
use crate::error::StoreError;

/// Reads `ArticleCollection` JSON from a fixed path on every load
pub struct JsonFileArticleStore {
    path: PathBuf,
}

impl JsonFileArticleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArticleStore for JsonFileArticleStore {
    async fn load(&self) -> Result<ArticleCollection, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let collection: ArticleCollection = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded {} articles from {}",
            collection.articles.len(),
            self.path.display()
        );
        Ok(collection)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "updated_at": "2025-01-10T12:34:56.123456",
        "total": 2,
        "articles": [
            {"id": "zenn_a", "title": "Rustで作るCLI", "url": "https://zenn.dev/a", "source": "Zenn", "publishedAt": "2025-01-10", "description": "clap入門"},
            {"id": "qiita_b", "title": "TypeScript型パズル", "url": "https://qiita.com/b", "source": "Qiita", "publishedAt": "2025-01-09"}
        ]
    }"#;

    #[tokio::test]
    async fn loads_collection_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = JsonFileArticleStore::new(file.path());
        let collection = store.load().await.unwrap();

        assert_eq!(collection.updated_at, "2025-01-10T12:34:56.123456");
        assert_eq!(collection.total, 2);
        assert_eq!(collection.articles[0].id, "zenn_a");
        assert_eq!(collection.articles[1].description, None);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileArticleStore::new(dir.path().join("articles.json"));

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"updated_at\": ").unwrap();

        let store = JsonFileArticleStore::new(file.path());
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[tokio::test]
    async fn directory_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileArticleStore::new(dir.path());

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
