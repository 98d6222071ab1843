//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Article, ArticleCollection};

/// Create a test article without a description
pub fn test_article(id: &str, source: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://example.test/{}", id),
        source: source.to_string(),
        published_at: "2025-01-10".to_string(),
        description: None,
    }
}

/// Create a test article with a description
pub fn test_article_with_description(
    id: &str,
    source: &str,
    title: &str,
    description: &str,
) -> Article {
    Article {
        description: Some(description.to_string()),
        ..test_article(id, source, title)
    }
}

/// A mixed collection covering every listed source, newest first
pub fn sample_articles() -> Vec<Article> {
    vec![
        test_article_with_description(
            "zenn_rust-axum",
            "Zenn",
            "axumで作るREST API",
            "Rustのaxumでシンプルなサーバーを書く",
        ),
        test_article_with_description(
            "qiita_0a1b2c",
            "Qiita",
            "TypeScriptの型パズル入門",
            "Conditional Types を使いこなす...",
        ),
        test_article("hatena_42", "はてなブログ", "今週のRustニュース"),
        test_article_with_description(
            "zenn_next-app-router",
            "Zenn",
            "Next.js App Router 移行記",
            "",
        ),
        test_article_with_description(
            "qiita_9z8y7x",
            "Qiita",
            "Rust製CLIツールまとめ",
            "ripgrep, fd, bat など",
        ),
    ]
}

pub fn sample_collection() -> ArticleCollection {
    ArticleCollection::new("2025-01-10T12:34:56.123456", sample_articles())
}
