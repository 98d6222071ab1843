//! Unified error types for the DevFeed API
//!
//! This module defines error types for each layer:
//! - `StoreError`: Article data source errors (file or upstream HTTP)
//! - `AppError`: Application layer errors (wraps store errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Shown when the data file has not been produced yet
pub const MISSING_DATA_HINT: &str =
    "Please run the scraper script first: python scripts/scraper.py";

/// Article store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Articles data not found at {0}")]
    NotFound(String),

    #[error("Failed to read articles: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse articles: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Decode(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Store(StoreError::NotFound(location)) => {
                tracing::warn!("Articles data not found: {}", location);
                (
                    StatusCode::NOT_FOUND,
                    "Articles data not found",
                    MISSING_DATA_HINT.to_string(),
                )
            }
            AppError::Store(e) => {
                tracing::error!("Error reading articles: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load articles",
                    e.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
