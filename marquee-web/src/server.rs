//! HTMX + Tailwind web server for the Marquee search UI
//!
//! All pages use server-side rendering; the search flow updates through an
//! HTMX fragment endpoint, and `/api/search` exposes the same view as JSON.

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use marquee_core::MarqueeConfig;
use marquee_search::MovieSearchWidget;
use tower_http::cors::CorsLayer;

use crate::handlers::{api_search, htmx_search};
use crate::pages::search_page;

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebServerConfig {
    /// Address to bind the listener to
    pub bind_address: SocketAddr,
}

impl WebServerConfig {
    /// Derives the server configuration from the central Marquee config.
    pub fn from_marquee_config(config: &MarqueeConfig) -> Self {
        Self {
            bind_address: config.web.bind_address,
        }
    }
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The movie search widget backing the UI
    pub widget: MovieSearchWidget,
}

/// Builds the router serving pages, HTMX fragments, and the JSON API.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(search_page))
        .route("/search", get(search_page))
        .route("/htmx/search", get(htmx_search))
        .route("/api/search", get(api_search))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the web server until shutdown.
///
/// # Errors
///
/// Returns an error if the configured address cannot be bound or the server
/// fails while serving.
pub async fn run_server(
    config: WebServerConfig,
    widget: MovieSearchWidget,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = build_router(AppState { widget });

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!(address = %config.bind_address, "marquee web server listening");

    axum::serve(listener, router).await?;

    Ok(())
}
