//! Provider implementations for movie search backends.

use async_trait::async_trait;

use crate::errors::MovieSearchError;
use crate::types::MovieResult;

pub mod development;
pub mod mock;
pub mod tmdb;

pub use development::DevelopmentProvider;
#[cfg(test)]
pub use mock::MockProvider;
pub use tmdb::TmdbProvider;

/// Trait for movie search backends.
///
/// Implementations provide the search half of the widget flow through
/// different backends (the live TMDB API, demo data, scripted providers for
/// testing).
#[async_trait]
pub trait MovieSearchProvider: Send + Sync + std::fmt::Debug {
    /// Search for movies matching the query and return the first page of
    /// results in response order.
    ///
    /// # Errors
    /// - `MovieSearchError::NetworkError` - request failed before a response arrived
    /// - `MovieSearchError::ParseError` - response body was not the expected JSON
    /// - `MovieSearchError::ProviderError` - backend reported an error
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieResult>, MovieSearchError>;
}
