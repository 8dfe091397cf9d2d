//! The movie search widget: query state, search lifecycle, derived card view.
//!
//! The widget owns the query text and the [`SearchState`] cell. Frontends
//! mutate it only through [`MovieSearchWidget::update_query`] and
//! [`MovieSearchWidget::trigger_search`]; everything the user sees is a pure
//! projection of the cell.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::providers::MovieSearchProvider;
use crate::types::{MovieCard, SearchState, project_cards};

/// Fixed user-visible message when the API credential is absent.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "API key is missing";

/// Fixed user-visible message for any transport or decode failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies";

#[derive(Debug)]
struct WidgetCell {
    query: String,
    search: SearchState,
}

/// Interactive movie search widget.
///
/// Clones share the same state cell, so a frontend can hand the widget to
/// handlers freely. The search backend is injected at construction, which
/// keeps the widget testable without touching the network or the process
/// environment.
#[derive(Debug, Clone)]
pub struct MovieSearchWidget {
    cell: Arc<RwLock<WidgetCell>>,
    provider: Arc<dyn MovieSearchProvider>,
    credential: Option<String>,
    image_base_url: String,
}

impl MovieSearchWidget {
    /// Creates a widget with an injected credential and search backend.
    ///
    /// The credential is captured once here; the widget never re-reads the
    /// environment.
    pub fn new(
        credential: Option<String>,
        image_base_url: impl Into<String>,
        provider: Arc<dyn MovieSearchProvider>,
    ) -> Self {
        Self {
            cell: Arc::new(RwLock::new(WidgetCell {
                query: String::new(),
                search: SearchState::Idle,
            })),
            provider,
            credential,
            image_base_url: image_base_url.into(),
        }
    }

    /// Replaces the query text verbatim. No validation, no trimming.
    pub async fn update_query(&self, text: impl Into<String>) {
        let mut cell = self.cell.write().await;
        cell.query = text.into();
    }

    /// Returns the current query text.
    pub async fn query(&self) -> String {
        self.cell.read().await.query.clone()
    }

    /// Returns a snapshot of the current search state.
    pub async fn search_state(&self) -> SearchState {
        self.cell.read().await.search.clone()
    }

    /// Projects the current state into displayable cards.
    ///
    /// Empty while Loading or Errored; otherwise the filtered, sorted,
    /// formatted view of the last loaded result set.
    pub async fn visible_cards(&self) -> Vec<MovieCard> {
        match &self.cell.read().await.search {
            SearchState::Loaded(results) => project_cards(results, &self.image_base_url),
            _ => Vec::new(),
        }
    }

    /// Triggers a search for the current query.
    ///
    /// An empty query is a silent no-op. A missing or empty credential
    /// transitions straight to `Errored` without any backend call. Otherwise
    /// the state becomes `Loading` and exactly one backend request is
    /// dispatched as a background task; the task settles the state into
    /// `Loaded` or `Errored` exactly once, whatever the outcome.
    ///
    /// Returns the handle of the dispatched request so callers can await
    /// completion, or `None` when no request was dispatched. The spawned
    /// task holds only a weak reference to the widget state: a completion
    /// arriving after the last widget clone is dropped is discarded.
    pub async fn trigger_search(&self) -> Option<JoinHandle<()>> {
        // The query is captured at trigger time; later edits do not affect
        // the in-flight request.
        let query = self.cell.read().await.query.clone();
        if query.is_empty() {
            return None;
        }

        let has_credential = self
            .credential
            .as_deref()
            .is_some_and(|key| !key.is_empty());
        if !has_credential {
            let mut cell = self.cell.write().await;
            cell.search = SearchState::Errored(MISSING_CREDENTIAL_MESSAGE.to_string());
            return None;
        }

        {
            // Discards previous results and errors in the same transition.
            let mut cell = self.cell.write().await;
            cell.search = SearchState::Loading;
        }

        let provider = Arc::clone(&self.provider);
        let state = Arc::downgrade(&self.cell);

        Some(tokio::spawn(async move {
            let outcome = provider.search_movies(&query).await;

            let Some(cell) = state.upgrade() else {
                debug!(query = %query, "search completed after widget teardown, discarding");
                return;
            };

            let mut cell = cell.write().await;
            cell.search = match outcome {
                Ok(results) => {
                    debug!(query = %query, count = results.len(), "search completed");
                    SearchState::Loaded(results)
                }
                Err(error) => {
                    // The cause stays in the logs; the user sees one fixed message.
                    warn!(%error, query = %query, "movie search failed");
                    SearchState::Errored(FETCH_FAILED_MESSAGE.to_string())
                }
            };
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;
    use crate::types::MovieResult;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w185_and_h278_bestv2";

    fn sample_results() -> Vec<MovieResult> {
        vec![
            MovieResult {
                id: Some(1),
                title: Some("A".to_string()),
                release_date: Some("2020-01-01".to_string()),
                vote_average: Some(7.5),
                poster_path: Some("/a.jpg".to_string()),
                overview: Some("x".to_string()),
            },
            MovieResult {
                id: Some(2),
                title: Some("B".to_string()),
                release_date: Some("2021-06-01".to_string()),
                vote_average: Some(8.0),
                poster_path: Some("/b.jpg".to_string()),
                overview: Some("y".to_string()),
            },
        ]
    }

    fn widget_with(
        credential: Option<&str>,
        provider: Arc<MockProvider>,
    ) -> MovieSearchWidget {
        MovieSearchWidget::new(
            credential.map(str::to_string),
            IMAGE_BASE,
            provider as Arc<dyn MovieSearchProvider>,
        )
    }

    #[tokio::test]
    async fn test_empty_query_is_silent_noop() {
        let provider = Arc::new(MockProvider::with_results(sample_results()));
        let widget = widget_with(Some("key"), Arc::clone(&provider));

        assert!(widget.trigger_search().await.is_none());

        assert_eq!(widget.search_state().await, SearchState::Idle);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_errors_without_backend_call() {
        let provider = Arc::new(MockProvider::with_results(sample_results()));
        let widget = widget_with(None, Arc::clone(&provider));
        widget.update_query("dune").await;

        assert!(widget.trigger_search().await.is_none());

        assert_eq!(
            widget.search_state().await,
            SearchState::Errored("API key is missing".to_string())
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_credential_counts_as_missing() {
        let provider = Arc::new(MockProvider::with_results(sample_results()));
        let widget = widget_with(Some(""), Arc::clone(&provider));
        widget.update_query("dune").await;

        assert!(widget.trigger_search().await.is_none());

        assert_eq!(
            widget.search_state().await,
            SearchState::Errored("API key is missing".to_string())
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_search_is_loading_before_settle() {
        let provider = Arc::new(MockProvider::gated(sample_results()));
        let widget = widget_with(Some("key"), Arc::clone(&provider));
        widget.update_query("dune").await;

        let handle = widget.trigger_search().await.expect("dispatched");
        assert!(widget.search_state().await.is_loading());
        assert!(widget.visible_cards().await.is_empty());

        provider.release();
        handle.await.expect("search task");

        assert!(matches!(
            widget.search_state().await,
            SearchState::Loaded(_)
        ));
    }

    #[tokio::test]
    async fn test_backend_failure_collapses_to_fixed_message() {
        let provider = Arc::new(MockProvider::failing("socket closed"));
        let widget = widget_with(Some("key"), Arc::clone(&provider));
        widget.update_query("dune").await;

        let handle = widget.trigger_search().await.expect("dispatched");
        handle.await.expect("search task");

        assert_eq!(
            widget.search_state().await,
            SearchState::Errored("Failed to fetch movies".to_string())
        );
    }

    #[tokio::test]
    async fn test_retrigger_discards_previous_results() {
        let provider = Arc::new(MockProvider::with_results(sample_results()));
        let widget = widget_with(Some("key"), Arc::clone(&provider));
        widget.update_query("dune").await;

        let handle = widget.trigger_search().await.expect("dispatched");
        handle.await.expect("search task");
        assert_eq!(widget.visible_cards().await.len(), 2);

        // The second trigger flips straight back to Loading, so the old
        // result set disappears before the new one arrives.
        let handle = widget.trigger_search().await.expect("dispatched");
        assert!(widget.search_state().await.is_loading());
        assert!(widget.visible_cards().await.is_empty());
        handle.await.expect("search task");
    }

    #[tokio::test]
    async fn test_query_captured_at_trigger_time() {
        let provider = Arc::new(MockProvider::gated(sample_results()));
        let widget = widget_with(Some("key"), Arc::clone(&provider));
        widget.update_query("first").await;

        let handle = widget.trigger_search().await.expect("dispatched");
        widget.update_query("second").await;

        provider.release();
        handle.await.expect("search task");

        assert_eq!(provider.last_query().as_deref(), Some("first"));
        assert_eq!(widget.query().await, "second");
    }

    #[tokio::test]
    async fn test_completion_after_teardown_is_discarded() {
        let provider = Arc::new(MockProvider::gated(sample_results()));
        let widget = widget_with(Some("key"), Arc::clone(&provider));
        widget.update_query("dune").await;

        let handle = widget.trigger_search().await.expect("dispatched");
        drop(widget);

        provider.release();
        // The completion write upgrades a dead weak reference and bails out.
        handle.await.expect("search task");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_visible_cards_sorted_descending_by_release_date() {
        let provider = Arc::new(MockProvider::with_results(sample_results()));
        let widget = widget_with(Some("key"), Arc::clone(&provider));
        widget.update_query("dune").await;

        let handle = widget.trigger_search().await.expect("dispatched");
        handle.await.expect("search task");

        let cards = widget.visible_cards().await;
        let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(cards[0].rating, "8.00");
        assert_eq!(cards[1].rating, "7.50");
    }
}
