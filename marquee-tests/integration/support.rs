//! Shared fixtures and scripted providers for integration tests

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use marquee_search::errors::MovieSearchError;
use marquee_search::{MovieResult, MovieSearchProvider, MovieSearchWidget};

/// Image base matching the production default.
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w185_and_h278_bestv2";

/// Two-record fixture: "A" released before "B", both with posters.
pub fn sample_results() -> Vec<MovieResult> {
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

/// Scripted search backend that counts calls and replays a fixed outcome.
#[derive(Debug)]
pub struct ScriptedProvider {
    outcome: Result<Vec<MovieResult>, String>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn with_results(results: Vec<MovieResult>) -> Self {
        Self {
            outcome: Ok(results),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieSearchProvider for ScriptedProvider {
    async fn search_movies(&self, _query: &str) -> Result<Vec<MovieResult>, MovieSearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            Ok(results) => Ok(results.clone()),
            Err(reason) => Err(MovieSearchError::ProviderError {
                reason: reason.clone(),
            }),
        }
    }
}

/// Builds a widget around a scripted provider.
pub fn widget_with(credential: Option<&str>, provider: Arc<ScriptedProvider>) -> MovieSearchWidget {
    MovieSearchWidget::new(
        credential.map(str::to_string),
        IMAGE_BASE,
        provider as Arc<dyn MovieSearchProvider>,
    )
}

/// Binds a router on an ephemeral local port and serves it in the background.
pub async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let address = listener.local_addr().expect("stub listener address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });

    address
}
