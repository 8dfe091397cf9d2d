//! Error types for movie search backends.

use thiserror::Error;

/// Errors that can occur while querying a movie search backend.
///
/// These carry the underlying detail for logging; the widget collapses all
/// of them into one fixed user-visible message at its boundary.
#[derive(Debug, Error)]
pub enum MovieSearchError {
    /// Network communication failed before a response was received.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// The search backend reported an error or is unavailable.
    #[error("Provider error: {reason}")]
    ProviderError {
        /// The reason for the provider error
        reason: String,
    },
}
