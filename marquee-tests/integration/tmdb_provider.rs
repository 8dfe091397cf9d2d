//! TMDB provider tests against a local stub server
//!
//! A scripted axum server stands in for api.themoviedb.org so the provider's
//! URL shape, decoding, and failure mapping are exercised over real HTTP.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use marquee_core::config::TmdbConfig;
use marquee_search::errors::MovieSearchError;
use marquee_search::{MovieSearchProvider, TmdbProvider};
use serde_json::json;

use crate::support::spawn_server;

type ParamLog = Arc<Mutex<Option<HashMap<String, String>>>>;

/// Stub for the `/3/search/movie` endpoint, recording the query parameters
/// it receives and answering with a fixed JSON body.
fn stub_router(body: serde_json::Value, log: ParamLog) -> Router {
    Router::new().route(
        "/3/search/movie",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let body = body.clone();
            let log = Arc::clone(&log);
            async move {
                *log.lock().unwrap() = Some(params);
                Json(body)
            }
        }),
    )
}

fn provider_for(address: std::net::SocketAddr) -> TmdbProvider {
    TmdbProvider::new(TmdbConfig {
        api_key: Some("test-key".to_string()),
        api_base_url: format!("http://{address}/3"),
        ..TmdbConfig::default()
    })
}

#[tokio::test]
async fn decodes_results_and_sends_encoded_query() {
    let log: ParamLog = Arc::new(Mutex::new(None));
    let body = json!({
        "page": 1,
        "results": [
            {"id": 1, "title": "A", "release_date": "2020-01-01", "vote_average": 7.5,
             "poster_path": "/a.jpg", "overview": "x"},
            {"id": 2, "title": "B", "release_date": "2021-06-01", "vote_average": 8.0,
             "poster_path": "/b.jpg", "overview": "y"}
        ],
        "total_results": 2
    });
    let address = spawn_server(stub_router(body, Arc::clone(&log))).await;

    let provider = provider_for(address);
    let results = provider
        .search_movies("fast & furious")
        .await
        .expect("search succeeds");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title.as_deref(), Some("A"));
    assert_eq!(results[1].vote_average, Some(8.0));

    // The query parameter arrives intact, which means the provider encoded
    // the reserved characters rather than splitting the URL on them.
    let params = log.lock().unwrap().clone().expect("request arrived");
    assert_eq!(params.get("api_key").map(String::as_str), Some("test-key"));
    assert_eq!(
        params.get("query").map(String::as_str),
        Some("fast & furious")
    );
}

#[tokio::test]
async fn missing_results_field_decodes_as_empty_list() {
    let log: ParamLog = Arc::new(Mutex::new(None));
    let address = spawn_server(stub_router(json!({"page": 1}), log)).await;

    let provider = provider_for(address);
    let results = provider.search_movies("dune").await.expect("search succeeds");

    assert!(results.is_empty());
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let router = Router::new().route("/3/search/movie", get(|| async { "definitely not json" }));
    let address = spawn_server(router).await;

    let provider = provider_for(address);
    let error = provider.search_movies("dune").await.unwrap_err();

    assert!(matches!(error, MovieSearchError::ParseError { .. }));
}

#[tokio::test]
async fn http_error_status_is_a_provider_error() {
    let router = Router::new().route(
        "/3/search/movie",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let address = spawn_server(router).await;

    let provider = provider_for(address);
    let error = provider.search_movies("dune").await.unwrap_err();

    assert!(matches!(error, MovieSearchError::ProviderError { .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Bind and immediately drop a listener so the port is closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let address = listener.local_addr().expect("address");
    drop(listener);

    let provider = provider_for(address);
    let error = provider.search_movies("dune").await.unwrap_err();

    assert!(matches!(error, MovieSearchError::NetworkError { .. }));
}
