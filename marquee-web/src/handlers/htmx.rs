//! HTMX fragment handlers for the search flow

use axum::extract::{Query, State};
use axum::response::Html;
use tracing::warn;

use super::api::SearchParams;
use crate::components::movie;
use crate::server::AppState;

/// Runs the widget search flow and renders the results fragment.
///
/// The client-side loading indicator covers the in-flight window; the
/// fragment itself renders whatever state the widget settled into.
pub async fn htmx_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    state.widget.update_query(params.query).await;

    if let Some(handle) = state.widget.trigger_search().await {
        if handle.await.is_err() {
            warn!("search task aborted before settling");
        }
    }

    let search_state = state.widget.search_state().await;
    let cards = state.widget.visible_cards().await;

    Html(movie::search_results(&search_state, &cards))
}
