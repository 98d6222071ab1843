//! Page renderer
//!
//! Renders the article list page to HTML. Every card is emitted; cards that
//! fail the current filter carry `hidden` so the inline script can re-filter
//! on the client without another request.

use chrono::NaiveDateTime;

use crate::app::{tab_counts, ListFilter};
use crate::domain::entities::{parse_timestamp, Article, ArticleCollection, SourceTab};

const STYLE: &str = include_str!("assets/style.css");
const SCRIPT: &str = include_str!("assets/list_filter.js");
const SCRAPER_COMMAND: &str = "python scripts/scraper.py";

/// Render the full article page
pub fn render_page(collection: &ArticleCollection, filter: &ListFilter) -> String {
    let articles = &collection.articles;
    let visible = filter.apply(articles).len();

    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    buf.push_str("<title>DevFeed</title>\n");
    buf.push_str(&format!("<style>\n{}</style>\n", STYLE));
    buf.push_str("</head>\n<body>\n");

    // Header
    buf.push_str("<header><div class=\"container\">\n");
    buf.push_str("<h1>DevFeed</h1>\n");
    buf.push_str("<p>技術記事を一箇所で。Zenn, Qiita, はてなブログの最新記事をチェック</p>\n");
    buf.push_str("</div></header>\n");

    buf.push_str(&format!(
        "<main class=\"container\" id=\"devfeed\" data-selected=\"{}\">\n",
        escape(tab_param(filter.tab))
    ));

    buf.push_str(&render_tabs(articles, filter));
    buf.push_str(&render_search(filter));

    if !collection.updated_at.is_empty() {
        buf.push_str(&format!(
            "<div class=\"meta\">最終更新: {}<span id=\"visible-count\">表示中: {}件</span></div>\n",
            escape(&format_updated_at(&collection.updated_at)),
            visible
        ));
    }

    buf.push_str("<div class=\"articles\">\n");
    for article in articles {
        buf.push_str(&render_article(article, filter.matches(article)));
    }
    buf.push_str("</div>\n");

    buf.push_str(&render_empty_state(filter.tab, visible == 0));

    buf.push_str("</main>\n");
    buf.push_str(&format!("<script>\n{}</script>\n", SCRIPT));
    buf.push_str("</body>\n</html>\n");

    buf
}

fn render_tabs(articles: &[Article], filter: &ListFilter) -> String {
    let mut buf = String::from("<nav class=\"tabs\" role=\"tablist\">\n");

    for (tab, count) in tab_counts(articles) {
        let active = tab == filter.tab;
        buf.push_str(&format!(
            "<a class=\"tab{}\" role=\"tab\" aria-selected=\"{}\" href=\"{}\" data-tab=\"{}\">{}<span class=\"count\">({})</span></a>\n",
            if active { " active" } else { "" },
            active,
            escape(&page_href(tab, filter.input().trim())),
            escape(tab_param(tab)),
            escape(tab.label()),
            count
        ));
    }

    buf.push_str("</nav>\n");
    buf
}

fn render_search(filter: &ListFilter) -> String {
    let mut buf = String::from("<form class=\"search\" method=\"get\" action=\"/\" role=\"search\">\n");

    buf.push_str("<label for=\"article-search\" class=\"sr-only\">記事検索</label>\n");
    buf.push_str(&format!(
        "<input type=\"hidden\" name=\"source\" id=\"search-source\" value=\"{}\">\n",
        escape(tab_param(filter.tab))
    ));
    buf.push_str(&format!(
        "<input id=\"article-search\" type=\"search\" name=\"q\" value=\"{}\" placeholder=\"キーワードで記事を検索 (タイトル / 説明 / ソース)\" autocomplete=\"off\">\n",
        escape(filter.input())
    ));
    buf.push_str(&format!(
        "<a id=\"search-clear\" href=\"{}\"{}>クリア</a>\n",
        escape(&page_href(filter.tab, "")),
        if filter.input().is_empty() { " hidden" } else { "" }
    ));

    buf.push_str("</form>\n");
    buf
}

fn render_article(article: &Article, visible: bool) -> String {
    let mut buf = format!(
        "<article class=\"article-card\" data-source=\"{}\" data-title=\"{}\" data-description=\"{}\"{}>\n",
        escape(&article.source),
        escape(&article.title),
        escape(article.description.as_deref().unwrap_or_default()),
        if visible { "" } else { " hidden" }
    );

    buf.push_str(&format!(
        "<h2><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></h2>\n",
        escape(&article.url),
        escape(&article.title)
    ));

    if let Some(summary) = article.summary() {
        buf.push_str(&format!("<p>{}</p>\n", escape(summary)));
    }

    buf.push_str(&format!(
        "<div class=\"info\"><span class=\"badge\">{}</span><time datetime=\"{}\">{}</time></div>\n",
        escape(&article.source),
        escape(&article.published_at),
        escape(&format_published_at(&article.published_at))
    ));

    buf.push_str("</article>\n");
    buf
}

fn render_empty_state(tab: SourceTab, empty: bool) -> String {
    let is_all = tab == SourceTab::All;

    let mut buf = format!(
        "<div id=\"empty-state\"{}>\n",
        if empty { "" } else { " hidden" }
    );
    buf.push_str(&format!(
        "<p class=\"empty-all\"{}>記事がありません。<br><code>{}</code><br>を実行して記事を取得してください。</p>\n",
        if is_all { "" } else { " hidden" },
        SCRAPER_COMMAND
    ));
    buf.push_str(&format!(
        "<p class=\"empty-source\"{}><span class=\"empty-source-name\">{}</span>の記事がありません。</p>\n",
        if is_all { " hidden" } else { "" },
        if is_all { "" } else { tab.label() }
    ));
    buf.push_str("</div>\n");
    buf
}

/// Value of the `source` query parameter selecting `tab`
fn tab_param(tab: SourceTab) -> &'static str {
    match tab {
        SourceTab::All => "all",
        SourceTab::Only(source) => source.label(),
    }
}

fn page_href(tab: SourceTab, keyword: &str) -> String {
    let mut params = Vec::new();
    if tab != SourceTab::All {
        params.push(format!("source={}", urlencoding::encode(tab_param(tab))));
    }
    if !keyword.is_empty() {
        params.push(format!("q={}", urlencoding::encode(keyword)));
    }

    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

/// `2025年1月10日 12:34`, or the raw value if it cannot be parsed
fn format_updated_at(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| format_date_time(&dt))
        .unwrap_or_else(|| value.to_string())
}

/// `2025年1月10日`, or the raw value if it cannot be parsed
fn format_published_at(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%Y年%-m月%-d日").to_string())
        .unwrap_or_else(|| value.to_string())
}

fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format("%Y年%-m月%-d日 %H:%M").to_string()
}

/// Escape text for HTML element content and quoted attributes
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
