//! DevFeed API Server
//!
//! Serves technical articles aggregated from Zenn, Qiita and Hatena Blog.
//! The collection is a JSON file produced by an external scraper; this server
//! only reads it, through a JSON API and a server-rendered page.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod page;

#[cfg(test)]
mod test_utils;


use adapters::{HttpArticleStore, JsonFileArticleStore};
use app::ArticleService;
use config::Config;
use domain::ports::ArticleStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Backs `/api/articles`; errors propagate
    pub article_service: Arc<ArticleService>,
    /// Backs the page; errors fall back to an empty list
    pub page_service: Arc<ArticleService>,
}

impl AppState {
    /// The API always reads the file. The page reads a remote API when one
    /// is configured, and the same file otherwise.
    pub fn from_config(config: &Config) -> Self {
        let file_store: Arc<dyn ArticleStore> =
            Arc::new(JsonFileArticleStore::new(config.articles_path.clone()));

        let page_store: Arc<dyn ArticleStore> = match &config.api_url {
            Some(url) => Arc::new(HttpArticleStore::new(url.clone())),
            None => file_store.clone(),
        };

        Self::new(file_store, page_store)
    }

    pub fn new(api_store: Arc<dyn ArticleStore>, page_store: Arc<dyn ArticleStore>) -> Self {
        Self {
            article_service: Arc::new(ArticleService::new(api_store)),
            page_service: Arc::new(ArticleService::new(page_store)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(health))
        .route("/api/articles", get(handlers::list_articles))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,devfeed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DevFeed...");

    let config = Config::from_env();
    tracing::info!("Reading articles from {}", config.articles_path.display());
    if let Some(url) = &config.api_url {
        tracing::info!("Page reads articles from {}", url);
    }
    if !config.articles_path.exists() {
        tracing::warn!(
            "{} does not exist yet; run python scripts/scraper.py",
            config.articles_path.display()
        );
    }

    let app = router(AppState::from_config(&config));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
