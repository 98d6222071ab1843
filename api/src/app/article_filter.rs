//! Article filtering
//!
//! Two independent filter sets over the same collection:
//! - `ArticleQuery`: the API's `source` / `limit` parameters
//! - `ListFilter`: the page's source tab and free-text keyword
//!
//! Both preserve the collection's original order.

use crate::domain::entities::{Article, SourceTab};

/// Filters accepted by `GET /api/articles`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    /// Case-insensitive exact source match
    pub source: Option<String>,
    /// Keep at most this many articles (always > 0)
    pub limit: Option<usize>,
}

impl ArticleQuery {
    /// Build from raw query values. Empty sources and unusable limits are dropped.
    pub fn from_params(source: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            source: source.filter(|s| !s.is_empty()).map(str::to_string),
            limit: limit.and_then(parse_limit),
        }
    }

    pub fn matches_source(&self, article: &Article) -> bool {
        match &self.source {
            Some(source) => article.source.to_lowercase() == source.to_lowercase(),
            None => true,
        }
    }

    /// Source filter first, then truncate to `limit`
    pub fn apply(&self, articles: Vec<Article>) -> Vec<Article> {
        let filtered = articles.into_iter().filter(|a| self.matches_source(a));
        match self.limit {
            Some(limit) => filtered.take(limit).collect(),
            None => filtered.collect(),
        }
    }
}

/// Parse a limit the way a lenient leading-integer parse would.
///
/// Leading whitespace and a sign are accepted, then as many digits as are
/// present (`"10abc"` is 10). Returns `None` unless the result is positive.
/// Values too large for `usize` saturate.
pub fn parse_limit(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value = rest[..digits_len]
        .bytes()
        .fold(0usize, |acc, d| {
            acc.saturating_mul(10).saturating_add(usize::from(d - b'0'))
        });

    if negative || value == 0 {
        None
    } else {
        Some(value)
    }
}

/// Tab and keyword selection on the article page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    pub tab: SourceTab,
    input: String,
    keyword: String,
}

impl ListFilter {
    pub fn new(tab: SourceTab, keyword: &str) -> Self {
        Self {
            tab,
            input: keyword.to_string(),
            keyword: keyword.trim().to_lowercase(),
        }
    }

    /// Keyword as the user typed it
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Trimmed, lowercased keyword
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.tab.matches(article) && keyword_matches(article, &self.keyword)
    }

    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        articles.iter().filter(|a| self.matches(a)).collect()
    }
}

impl Default for ListFilter {
    fn default() -> Self {
        Self::new(SourceTab::All, "")
    }
}

/// Case-insensitive substring match on title, description or source.
///
/// `keyword` must already be trimmed and lowercased; empty matches everything.
pub fn keyword_matches(article: &Article, keyword: &str) -> bool {
    if keyword.is_empty() {
        return true;
    }

    article.title.to_lowercase().contains(keyword)
        || article
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(keyword))
        || article.source.to_lowercase().contains(keyword)
}

/// Article count per tab over the unfiltered collection
pub fn tab_counts(articles: &[Article]) -> Vec<(SourceTab, usize)> {
    SourceTab::TABS
        .iter()
        .map(|tab| (*tab, articles.iter().filter(|a| tab.matches(a)).count()))
        .collect()
}
