//! Centralized configuration for Marquee.
//!
//! All tunable parameters and endpoint URLs are defined here to avoid
//! hard-coded values scattered throughout the codebase. The TMDB credential
//! is read from the environment exactly once, at construction, and injected
//! into the components that need it.

use std::net::SocketAddr;

/// Central configuration for all Marquee components.
///
/// Groups related settings into logical sections and supports environment
/// variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    /// TMDB API endpoints and credential
    pub tmdb: TmdbConfig,
    /// Web UI server settings
    pub web: WebConfig,
}

/// TMDB API access configuration.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API key for api.themoviedb.org. An absent key is a recoverable,
    /// user-visible search error, not a startup failure.
    pub api_key: Option<String>,
    /// Base URL for API requests
    pub api_base_url: String,
    /// Base URL for poster images
    pub image_base_url: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w185_and_h278_bestv2".to_string(),
        }
    }
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Address the web UI binds to
    pub bind_address: SocketAddr,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl MarqueeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Reads the TMDB credential from `TMDB_API_KEY`. Endpoint and bind
    /// address overrides use the `MARQUEE_` prefix; unparseable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(api_key) = std::env::var("TMDB_API_KEY") {
            config.tmdb.api_key = Some(api_key);
        }

        if let Ok(base) = std::env::var("MARQUEE_TMDB_API_BASE") {
            config.tmdb.api_base_url = base;
        }

        if let Ok(base) = std::env::var("MARQUEE_TMDB_IMAGE_BASE") {
            config.tmdb.image_base_url = base;
        }

        if let Ok(address) = std::env::var("MARQUEE_BIND_ADDRESS") {
            if let Ok(parsed) = address.parse::<SocketAddr>() {
                config.web.bind_address = parsed;
            }
        }

        config
    }

    /// Creates a configuration suitable for tests: a dummy credential and
    /// no dependence on the process environment.
    pub fn for_testing() -> Self {
        Self {
            tmdb: TmdbConfig {
                api_key: Some("test-api-key".to_string()),
                ..TmdbConfig::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = MarqueeConfig::default();

        assert_eq!(config.tmdb.api_key, None);
        assert_eq!(config.tmdb.api_base_url, "https://api.themoviedb.org/3");
        assert_eq!(
            config.tmdb.image_base_url,
            "https://image.tmdb.org/t/p/w185_and_h278_bestv2"
        );
        assert_eq!(
            config.web.bind_address,
            SocketAddr::from(([127, 0, 0, 1], 3000))
        );
    }

    #[test]
    fn test_testing_preset_carries_credential() {
        let config = MarqueeConfig::for_testing();
        assert_eq!(config.tmdb.api_key.as_deref(), Some("test-api-key"));
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("TMDB_API_KEY", "secret-from-env");
            std::env::set_var("MARQUEE_TMDB_API_BASE", "http://127.0.0.1:9000/3");
            std::env::set_var("MARQUEE_BIND_ADDRESS", "0.0.0.0:8080");
        }

        let config = MarqueeConfig::from_env();

        assert_eq!(config.tmdb.api_key.as_deref(), Some("secret-from-env"));
        assert_eq!(config.tmdb.api_base_url, "http://127.0.0.1:9000/3");
        assert_eq!(
            config.web.bind_address,
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );

        // An unparseable bind address keeps the default.
        unsafe {
            std::env::set_var("MARQUEE_BIND_ADDRESS", "not-an-address");
        }
        let config = MarqueeConfig::from_env();
        assert_eq!(
            config.web.bind_address,
            SocketAddr::from(([127, 0, 0, 1], 3000))
        );

        // Cleanup
        unsafe {
            std::env::remove_var("TMDB_API_KEY");
            std::env::remove_var("MARQUEE_TMDB_API_BASE");
            std::env::remove_var("MARQUEE_BIND_ADDRESS");
        }
    }
}
