//! Widget search flow tests
//!
//! Exercises the full search lifecycle against scripted providers: the
//! precondition no-ops, the Loading window, the fixed error messages, and
//! the rendered projection.

use std::sync::Arc;

use marquee_search::{MovieResult, SearchState};

use crate::support::{ScriptedProvider, sample_results, widget_with};

#[tokio::test]
async fn empty_query_leaves_state_unchanged() {
    let provider = Arc::new(ScriptedProvider::with_results(sample_results()));
    let widget = widget_with(Some("key"), Arc::clone(&provider));

    // From Idle.
    assert!(widget.trigger_search().await.is_none());
    assert_eq!(widget.search_state().await, SearchState::Idle);

    // From Loaded: clearing the query and re-triggering keeps the results.
    widget.update_query("dune").await;
    let handle = widget.trigger_search().await.expect("dispatched");
    handle.await.expect("search task");
    let loaded = widget.search_state().await;

    widget.update_query("").await;
    assert!(widget.trigger_search().await.is_none());
    assert_eq!(widget.search_state().await, loaded);

    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn missing_credential_errors_without_any_backend_call() {
    let provider = Arc::new(ScriptedProvider::with_results(sample_results()));
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
async fn search_passes_through_loading_before_settling() {
    let provider = Arc::new(ScriptedProvider::with_results(sample_results()));
    let widget = widget_with(Some("key"), Arc::clone(&provider));

    widget.update_query("dune").await;
    let handle = widget.trigger_search().await.expect("dispatched");

    // Observable synchronously after the trigger, before completion.
    assert!(widget.search_state().await.is_loading());
    assert!(widget.visible_cards().await.is_empty());

    handle.await.expect("search task");
    assert!(matches!(widget.search_state().await, SearchState::Loaded(_)));
}

#[tokio::test]
async fn transport_failure_always_yields_the_fixed_message() {
    for reason in ["connection refused", "tls handshake", "unexpected eof"] {
        let provider = Arc::new(ScriptedProvider::failing(reason));
        let widget = widget_with(Some("key"), Arc::clone(&provider));

        widget.update_query("dune").await;
        let handle = widget.trigger_search().await.expect("dispatched");
        handle.await.expect("search task");

        assert_eq!(
            widget.search_state().await,
            SearchState::Errored("Failed to fetch movies".to_string())
        );
    }
}

#[tokio::test]
async fn loaded_results_render_sorted_and_formatted() {
    let provider = Arc::new(ScriptedProvider::with_results(sample_results()));
    let widget = widget_with(Some("key"), Arc::clone(&provider));

    widget.update_query("dune").await;
    let handle = widget.trigger_search().await.expect("dispatched");
    handle.await.expect("search task");

    let cards = widget.visible_cards().await;
    assert_eq!(cards.len(), 2);

    // Descending by release date: B (2021) before A (2020).
    assert_eq!(cards[0].title, "B");
    assert_eq!(cards[1].title, "A");
    assert_eq!(cards[0].rating, "8.00");
    assert_eq!(cards[1].rating, "7.50");
    assert_eq!(cards[0].release_date, "6/1/2021");
    assert_eq!(cards[1].release_date, "1/1/2020");
    assert_eq!(
        cards[0].poster_url,
        "https://image.tmdb.org/t/p/w185_and_h278_bestv2/b.jpg"
    );
}

#[tokio::test]
async fn entries_without_poster_are_excluded_entirely() {
    let mut results = sample_results();
    results.push(MovieResult {
        id: Some(3),
        title: Some("No Poster".to_string()),
        release_date: Some("2023-01-01".to_string()),
        vote_average: Some(9.5),
        poster_path: None,
        overview: Some("invisible".to_string()),
    });

    let provider = Arc::new(ScriptedProvider::with_results(results));
    let widget = widget_with(Some("key"), Arc::clone(&provider));

    widget.update_query("dune").await;
    let handle = widget.trigger_search().await.expect("dispatched");
    handle.await.expect("search task");

    let cards = widget.visible_cards().await;
    assert!(cards.iter().all(|card| card.title != "No Poster"));
    assert_eq!(cards.len(), 2);
}

#[tokio::test]
async fn rating_text_rounds_to_two_decimals() {
    let results = vec![
        MovieResult {
            id: Some(1),
            title: Some("Whole".to_string()),
            release_date: Some("2020-01-02".to_string()),
            vote_average: Some(6.0),
            poster_path: Some("/w.jpg".to_string()),
            overview: None,
        },
        MovieResult {
            id: Some(2),
            title: Some("AlmostTen".to_string()),
            release_date: Some("2020-01-01".to_string()),
            vote_average: Some(9.999),
            poster_path: Some("/t.jpg".to_string()),
            overview: None,
        },
    ];

    let provider = Arc::new(ScriptedProvider::with_results(results));
    let widget = widget_with(Some("key"), Arc::clone(&provider));

    widget.update_query("dune").await;
    let handle = widget.trigger_search().await.expect("dispatched");
    handle.await.expect("search task");

    let cards = widget.visible_cards().await;
    assert_eq!(cards[0].rating, "6.00");
    assert_eq!(cards[1].rating, "10.00");
}
