//! Article domain entity
//!
//! An article collected from one of the aggregated sites, plus the collection
//! document the scraper writes to `data/articles.json`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single aggregated article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Site label, normally one of [`Source::label`]
    pub source: String,
    /// ISO-8601 date or timestamp, kept as written upstream
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Article {
    /// Description, if present and not blank
    pub fn summary(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}

/// The JSON document served by the API and read from disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleCollection {
    pub updated_at: String,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl ArticleCollection {
    /// Build a collection whose `total` matches the article count
    pub fn new(updated_at: impl Into<String>, articles: Vec<Article>) -> Self {
        Self {
            updated_at: updated_at.into(),
            total: articles.len(),
            articles,
        }
    }

    /// Zeroed collection stamped with the current time
    pub fn empty() -> Self {
        Self::new(Utc::now().to_rfc3339(), Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Aggregated sites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Zenn,
    Qiita,
    HatenaBlog,
}

impl Source {
    /// Label used in the `source` field of scraped articles
    pub fn label(&self) -> &'static str {
        match self {
            Source::Zenn => "Zenn",
            Source::Qiita => "Qiita",
            Source::HatenaBlog => "はてなブログ",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zenn" => Ok(Source::Zenn),
            "qiita" => Ok(Source::Qiita),
            "はてなブログ" => Ok(Source::HatenaBlog),
            _ => Err(format!("Unknown source: {}", s)),
        }
    }
}

/// Source tab on the article page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTab {
    All,
    Only(Source),
}

impl SourceTab {
    /// Tabs in display order
    pub const TABS: [SourceTab; 4] = [
        SourceTab::All,
        SourceTab::Only(Source::Zenn),
        SourceTab::Only(Source::Qiita),
        SourceTab::Only(Source::HatenaBlog),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SourceTab::All => "すべて",
            SourceTab::Only(source) => source.label(),
        }
    }

    /// Resolve a `source` query value. Unknown or empty values select `All`.
    pub fn from_param(value: Option<&str>) -> Self {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return SourceTab::All;
        };
        if value.eq_ignore_ascii_case("all") || value == SourceTab::All.label() {
            return SourceTab::All;
        }
        value
            .parse::<Source>()
            .map(SourceTab::Only)
            .unwrap_or(SourceTab::All)
    }

    /// Tab selection is an exact match on the source label
    pub fn matches(&self, article: &Article) -> bool {
        match self {
            SourceTab::All => true,
            SourceTab::Only(source) => article.source == source.label(),
        }
    }
}

/// Parse the timestamp formats found in scraped data.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` and bare dates. Offsets
/// are dropped after converting to the timestamp's own local time.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
