//! TMDB search provider for production use.

use async_trait::async_trait;
use marquee_core::config::TmdbConfig;
use serde::Deserialize;
use tracing::debug;

use super::MovieSearchProvider;
use crate::errors::MovieSearchError;
use crate::types::MovieResult;

/// TMDB ("The Movie Database") search provider.
///
/// Issues a single request against the `/search/movie` endpoint and decodes
/// the first page of results. No retries, no pagination, no timeout beyond
/// the HTTP client's own behavior.
#[derive(Debug, Clone)]
pub struct TmdbProvider {
    client: reqwest::Client,
    config: TmdbConfig,
}

/// Response from the TMDB search endpoint.
///
/// A body without a `results` field decodes as an empty list; individual
/// record fields are all optional and pass through unvalidated.
#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    #[serde(default)]
    results: Vec<MovieResult>,
}

impl TmdbProvider {
    /// Creates a provider from TMDB configuration.
    pub fn new(config: TmdbConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Builds the search URL for a query.
    ///
    /// The query is percent-encoded so reserved characters cannot split or
    /// malform the URL.
    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search/movie?api_key={}&query={}",
            self.config.api_base_url,
            self.config.api_key.as_deref().unwrap_or_default(),
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl MovieSearchProvider for TmdbProvider {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieResult>, MovieSearchError> {
        let url = self.search_url(query);
        debug!(query = %query, "issuing TMDB search request");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| MovieSearchError::NetworkError {
                    reason: format!("TMDB request failed: {e}"),
                })?;

        if !response.status().is_success() {
            return Err(MovieSearchError::ProviderError {
                reason: format!("TMDB HTTP {}", response.status()),
            });
        }

        let body: TmdbSearchResponse =
            response
                .json()
                .await
                .map_err(|e| MovieSearchError::ParseError {
                    reason: format!("TMDB JSON decoding failed: {e}"),
                })?;

        Ok(body.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_with_key(api_key: Option<&str>) -> TmdbProvider {
        TmdbProvider::new(TmdbConfig {
            api_key: api_key.map(str::to_string),
            ..TmdbConfig::default()
        })
    }

    #[test]
    fn test_search_url_shape() {
        let provider = provider_with_key(Some("secret"));
        assert_eq!(
            provider.search_url("dune"),
            "https://api.themoviedb.org/3/search/movie?api_key=secret&query=dune"
        );
    }

    #[test]
    fn test_search_url_encodes_reserved_characters() {
        let provider = provider_with_key(Some("secret"));
        assert_eq!(
            provider.search_url("fast & furious"),
            "https://api.themoviedb.org/3/search/movie?api_key=secret&query=fast%20%26%20furious"
        );
    }

    #[test]
    fn test_response_without_results_field_decodes_empty() {
        let body: TmdbSearchResponse =
            serde_json::from_str(r#"{"page": 1, "total_results": 0}"#).expect("decode");
        assert!(body.results.is_empty());
    }

    #[test]
    fn test_response_records_tolerate_missing_fields() {
        let body: TmdbSearchResponse = serde_json::from_str(
            r#"{"results": [{"id": 7, "title": "Sparse"}, {"poster_path": "/p.jpg"}]}"#,
        )
        .expect("decode");

        assert_eq!(body.results.len(), 2);
        assert_eq!(body.results[0].id, Some(7));
        assert_eq!(body.results[1].poster_path.as_deref(), Some("/p.jpg"));
        assert_eq!(body.results[1].title, None);
    }
}
