//! Article API handlers
//!
//! Read-only JSON access to the scraped article collection.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::app::ArticleQuery;
use crate::domain::entities::ArticleCollection;
use crate::error::AppError;
use crate::handlers::{first_param, QueryPairs};
use crate::AppState;

/// GET /api/articles
///
/// Returns the collection, optionally filtered by `source` and truncated to `limit`.
/// Only the first value of a repeated parameter is used, and a bad `limit` is ignored.
/// Missing data is a 404; unreadable data is a 500.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<ArticleCollection>, AppError> {
    let query = ArticleQuery::from_params(
        first_param(&params, "source"),
        first_param(&params, "limit"),
    );
    let collection = state.article_service.query(&query).await?;
    Ok(Json(collection))
}
