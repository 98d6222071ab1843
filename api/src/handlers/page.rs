//! Page handlers
//!
//! Server-rendered article list. Data problems never fail the page.

use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::app::ListFilter;
use crate::domain::entities::SourceTab;
use crate::handlers::{first_param, QueryPairs};
use crate::page::render_page;
use crate::AppState;

/// GET /
///
/// Renders the article list with the requested `source` tab and `q` keyword applied.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Html<String> {
    let collection = state.page_service.load_or_empty().await;
    if collection.is_empty() {
        tracing::debug!("Rendering empty article list");
    }

    let filter = ListFilter::new(
        SourceTab::from_param(first_param(&params, "source")),
        first_param(&params, "q").unwrap_or_default(),
    );

    Html(render_page(&collection, &filter))
}
