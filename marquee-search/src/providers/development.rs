//! Demo provider implementation for development and testing.

use async_trait::async_trait;

use super::MovieSearchProvider;
use crate::errors::MovieSearchError;
use crate::types::MovieResult;

/// Demo provider for UI development without external API calls.
///
/// Returns a deterministic catalog derived from the query, covering the
/// render paths the real API exercises: mixed release years, fractional
/// ratings, and one entry without a poster.
#[derive(Debug)]
pub struct DevelopmentProvider;

impl Default for DevelopmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DevelopmentProvider {
    /// Creates a new demo provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MovieSearchProvider for DevelopmentProvider {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieResult>, MovieSearchError> {
        Ok(vec![
            MovieResult {
                id: Some(1),
                title: Some(query.to_string()),
                release_date: Some("2024-05-17".to_string()),
                vote_average: Some(8.1),
                poster_path: Some("/demo-poster-1.jpg".to_string()),
                overview: Some(format!("Demo overview for {query}.")),
            },
            MovieResult {
                id: Some(2),
                title: Some(format!("{query}: The Prequel")),
                release_date: Some("2019-11-08".to_string()),
                vote_average: Some(6.45),
                poster_path: Some("/demo-poster-2.jpg".to_string()),
                overview: Some("How it all started.".to_string()),
            },
            MovieResult {
                id: Some(3),
                title: Some(format!("{query}: Lost Cut")),
                release_date: Some("2021-03-02".to_string()),
                vote_average: Some(7.0),
                // No artwork, so the poster filter drops this entry at render time.
                poster_path: None,
                overview: Some("Never released in theaters.".to_string()),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_catalog_is_deterministic() {
        let provider = DevelopmentProvider::new();

        let first = provider.search_movies("Heat").await.unwrap();
        let second = provider.search_movies("Heat").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].title.as_deref(), Some("Heat"));
        assert!(first.iter().any(|m| !m.has_poster()));
    }
}
