//! Web UI end-to-end tests
//!
//! Serves the real router on an ephemeral port and drives the search flow
//! over HTTP: page markup, HTMX fragments, and the JSON API.

use std::net::SocketAddr;
use std::sync::Arc;

use marquee_search::{MovieResult, MovieSearchWidget};
use marquee_web::{AppState, build_router};

use crate::support::{ScriptedProvider, sample_results, spawn_server, widget_with};

async fn spawn_app(widget: MovieSearchWidget) -> SocketAddr {
    spawn_server(build_router(AppState { widget })).await
}

async fn get_text(address: SocketAddr, path_and_query: &str) -> String {
    reqwest::get(format!("http://{address}{path_and_query}"))
        .await
        .expect("request")
        .text()
        .await
        .expect("body")
}

#[tokio::test]
async fn search_page_serves_widget_markup() {
    let provider = Arc::new(ScriptedProvider::with_results(sample_results()));
    let address = spawn_app(widget_with(Some("key"), provider)).await;

    let body = get_text(address, "/").await;

    assert!(body.contains("Movie Search"));
    assert!(body.contains(r#"hx-get="/htmx/search""#));
    assert!(body.contains(r#"name="query""#));
    assert!(body.contains("Find your favorite movies!"));
}

#[tokio::test]
async fn htmx_search_renders_cards_in_release_order() {
    let provider = Arc::new(ScriptedProvider::with_results(sample_results()));
    let address = spawn_app(widget_with(Some("key"), provider)).await;

    let body = get_text(address, "/htmx/search?query=dune").await;

    let b_position = body.find(">B<").expect("card B rendered");
    let a_position = body.find(">A<").expect("card A rendered");
    assert!(b_position < a_position, "descending release order");
    assert!(body.contains("Rating: 8.00"));
    assert!(body.contains("Release Date: 1/1/2020"));
}

#[tokio::test]
async fn htmx_search_renders_fetch_failure_message() {
    let provider = Arc::new(ScriptedProvider::failing("backend down"));
    let address = spawn_app(widget_with(Some("key"), provider)).await;

    let body = get_text(address, "/htmx/search?query=dune").await;

    assert!(body.contains("Error: Failed to fetch movies"));
    // The underlying cause never reaches the page.
    assert!(!body.contains("backend down"));
}

#[tokio::test]
async fn htmx_search_reports_missing_credential_without_backend_call() {
    let provider = Arc::new(ScriptedProvider::with_results(sample_results()));
    let address = spawn_app(widget_with(None, Arc::clone(&provider))).await;

    let body = get_text(address, "/htmx/search?query=dune").await;

    assert!(body.contains("Error: API key is missing"));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn api_search_returns_visible_cards_as_json() {
    let provider = Arc::new(ScriptedProvider::with_results(sample_results()));
    let address = spawn_app(widget_with(Some("key"), provider)).await;

    let body = get_text(address, "/api/search?query=dune").await;
    let json: serde_json::Value = serde_json::from_str(&body).expect("json body");

    let results = json["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["title"], "B");
    assert_eq!(results[0]["rating"], "8.00");
    assert_eq!(results[1]["title"], "A");
}

#[tokio::test]
async fn api_search_with_empty_query_is_a_noop() {
    let provider = Arc::new(ScriptedProvider::with_results(sample_results()));
    let address = spawn_app(widget_with(Some("key"), Arc::clone(&provider))).await;

    let body = get_text(address, "/api/search").await;
    let json: serde_json::Value = serde_json::from_str(&body).expect("json body");

    assert_eq!(json["results"].as_array().map(Vec::len), Some(0));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn api_search_surfaces_missing_credential_as_error() {
    let provider = Arc::new(ScriptedProvider::with_results(sample_results()));
    let address = spawn_app(widget_with(None, provider)).await;

    let body = get_text(address, "/api/search?query=dune").await;
    let json: serde_json::Value = serde_json::from_str(&body).expect("json body");

    assert_eq!(json["error"], "API key is missing");
}

#[tokio::test]
async fn api_results_are_escaped_when_rendered_as_fragment() {
    let results = vec![MovieResult {
        id: Some(1),
        title: Some("<script>alert(1)</script>".to_string()),
        release_date: Some("2020-01-01".to_string()),
        vote_average: Some(5.0),
        poster_path: Some("/x.jpg".to_string()),
        overview: Some("fine".to_string()),
    }];
    let provider = Arc::new(ScriptedProvider::with_results(results));
    let address = spawn_app(widget_with(Some("key"), provider)).await;

    let body = get_text(address, "/htmx/search?query=dune").await;

    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}
