//! Mock provider implementation for testing.

#[cfg(test)]
use std::sync::Mutex;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use tokio::sync::Notify;

#[cfg(test)]
use super::MovieSearchProvider;
#[cfg(test)]
use crate::errors::MovieSearchError;
#[cfg(test)]
use crate::types::MovieResult;

/// Scripted provider for widget unit tests.
///
/// Records every call and replays a fixed outcome. The gated variant blocks
/// each call until [`MockProvider::release`] so tests can observe the
/// in-flight state deterministically.
#[cfg(test)]
#[derive(Debug)]
pub struct MockProvider {
    outcome: Result<Vec<MovieResult>, String>,
    gate: Option<Notify>,
    calls: AtomicUsize,
    last_query: Mutex<Option<String>>,
}

#[cfg(test)]
impl MockProvider {
    /// Provider that resolves every call with the given result set.
    pub fn with_results(results: Vec<MovieResult>) -> Self {
        Self {
            outcome: Ok(results),
            gate: None,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Provider that fails every call with a provider error.
    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(reason.to_string()),
            gate: None,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Provider that holds each call until [`MockProvider::release`].
    pub fn gated(results: Vec<MovieResult>) -> Self {
        Self {
            outcome: Ok(results),
            gate: Some(Notify::new()),
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Lets one gated call proceed.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Query string of the most recent call.
    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl MovieSearchProvider for MockProvider {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieResult>, MovieSearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.to_string());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.outcome {
            Ok(results) => Ok(results.clone()),
            Err(reason) => Err(MovieSearchError::ProviderError {
                reason: reason.clone(),
            }),
        }
    }
}
