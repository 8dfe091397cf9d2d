//! JSON API handlers for movie search

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::server::AppState;

/// Query parameters accepted by the search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The movie title to search for; defaults to empty
    #[serde(default)]
    pub query: String,
}

/// Runs the widget search flow for the given query and returns the visible
/// cards as JSON, or the user-visible error message.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<serde_json::Value> {
    state.widget.update_query(params.query).await;

    if let Some(handle) = state.widget.trigger_search().await {
        if handle.await.is_err() {
            warn!("search task aborted before settling");
        }
    }

    match state.widget.search_state().await {
        marquee_search::SearchState::Errored(message) => Json(json!({ "error": message })),
        _ => Json(json!({ "results": state.widget.visible_cards().await })),
    }
}
