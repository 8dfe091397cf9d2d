//! Marquee Core - Configuration, logging, and shared error types
//!
//! Foundation crate for the Marquee movie search service: centralized
//! configuration with environment overrides, tracing setup with dual
//! console/file output, and the top-level error type shared by the CLI
//! and web frontends.

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::missing_panics_doc)]

pub mod config;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::MarqueeConfig;

/// Core errors that can bubble up from any Marquee frontend.
///
/// Search failures never appear here: the widget collapses them into its own
/// rendered state. This type covers the surrounding plumbing.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    /// Invalid or missing configuration supplied at startup.
    #[error("Configuration error: {reason}")]
    Configuration {
        /// The reason the configuration was rejected
        reason: String,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Web server failed to start or crashed while serving.
    #[error("Web UI error: {reason}")]
    WebUI {
        /// The reason for the web server failure
        reason: String,
    },
}

impl MarqueeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::Configuration { reason } => {
                format!("Configuration error: {reason}")
            }
            MarqueeError::Io(_) => "File system error occurred".to_string(),
            MarqueeError::Serialization(_) => "Output formatting error occurred".to_string(),
            MarqueeError::WebUI { reason } => format!("Web interface error: {reason}"),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(self, MarqueeError::Configuration { .. })
    }

    /// Convert any displayable web server failure into a `MarqueeError`.
    pub fn from_web_error(error: impl std::fmt::Display) -> Self {
        MarqueeError::WebUI {
            reason: error.to_string(),
        }
    }
}

/// Convenience type alias for Results with MarqueeError.
pub type Result<T> = std::result::Result<T, MarqueeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_configuration_error() {
        let error = MarqueeError::Configuration {
            reason: "invalid bind address".to_string(),
        };
        assert_eq!(
            error.user_message(),
            "Configuration error: invalid bind address"
        );
        assert!(error.is_user_error());
    }

    #[test]
    fn test_from_web_error_preserves_reason() {
        let error = MarqueeError::from_web_error("address already in use");
        assert_eq!(
            error.user_message(),
            "Web interface error: address already in use"
        );
        assert!(!error.is_user_error());
    }
}
