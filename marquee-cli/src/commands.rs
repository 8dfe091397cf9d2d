//! CLI command implementations

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Subcommand;
use marquee_core::{MarqueeConfig, MarqueeError, Result};
use marquee_search::{
    DevelopmentProvider, MovieSearchProvider, MovieSearchWidget, SearchState, TmdbProvider,
};
use marquee_web::{WebServerConfig, run_server};
use tracing::debug;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search for movies and print the visible results
    Search {
        /// Movie title to search for
        query: String,
        /// Print the results as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Use the built-in demo catalog instead of the live API
        #[arg(long)]
        demo: bool,
    },
    /// Start the web UI server
    Server {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Use the built-in demo catalog instead of the live API
        #[arg(long)]
        demo: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Search { query, json, demo } => search_movies(query, json, demo).await,
        Commands::Server { host, port, demo } => start_server(host, port, demo).await,
    }
}

/// Builds the search widget from configuration.
///
/// Demo mode swaps in the offline catalog; it needs no real key, but the
/// widget still requires a present credential to dispatch at all.
fn build_widget(config: &MarqueeConfig, demo: bool) -> MovieSearchWidget {
    let (provider, credential): (Arc<dyn MovieSearchProvider>, Option<String>) = if demo {
        (
            Arc::new(DevelopmentProvider::new()),
            Some("demo".to_string()),
        )
    } else {
        (
            Arc::new(TmdbProvider::new(config.tmdb.clone())),
            config.tmdb.api_key.clone(),
        )
    };

    MovieSearchWidget::new(credential, config.tmdb.image_base_url.clone(), provider)
}

/// Run one search and print the rendered view
///
/// # Errors
/// - `MarqueeError::Serialization` - JSON output could not be produced
async fn search_movies(query: String, json: bool, demo: bool) -> Result<()> {
    let config = MarqueeConfig::from_env();
    let widget = build_widget(&config, demo);

    widget.update_query(query).await;
    if let Some(handle) = widget.trigger_search().await {
        if handle.await.is_err() {
            debug!("search task aborted before settling");
        }
    }

    match widget.search_state().await {
        SearchState::Errored(message) => println!("Error: {message}"),
        SearchState::Loaded(_) => {
            let cards = widget.visible_cards().await;

            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
                return Ok(());
            }

            if cards.is_empty() {
                println!("No results.");
                return Ok(());
            }

            println!("Search Results");
            println!("{:-<60}", "");
            for card in &cards {
                println!("{}", card.title);
                println!("  Release Date: {}", card.release_date);
                println!("  Rating: {}", card.rating);
                println!("  Poster: {}", card.poster_url);
                if !card.overview.is_empty() {
                    println!("  {}", card.overview);
                }
                println!();
            }
        }
        // An empty query never dispatches and gives no feedback.
        SearchState::Idle | SearchState::Loading => {}
    }

    Ok(())
}

/// Start the web server for the search UI
///
/// # Errors
/// - `MarqueeError::Configuration` - The host/port pair is not a valid address
/// - `MarqueeError::WebUI` - The server failed to bind or crashed while serving
async fn start_server(host: String, port: u16, demo: bool) -> Result<()> {
    let config = MarqueeConfig::from_env();
    let widget = build_widget(&config, demo);

    let mut web_config = WebServerConfig::from_marquee_config(&config);
    web_config.bind_address = parse_bind_address(&host, port)?;

    println!("Starting Marquee web server...");
    println!("Search: http://{host}:{port}/search");
    println!("API: http://{host}:{port}/api/search?query=<title>");
    if demo {
        println!("Mode: Demo (offline catalog)");
    }
    println!("{:-<50}", "");
    println!("Press Ctrl+C to stop the server");

    run_server(web_config, widget)
        .await
        .map_err(MarqueeError::from_web_error)?;

    Ok(())
}

/// Parse a host/port pair into a socket address
fn parse_bind_address(host: &str, port: u16) -> Result<SocketAddr> {
    format!("{host}:{port}")
        .parse()
        .map_err(|e| MarqueeError::Configuration {
            reason: format!("invalid bind address {host}:{port}: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind_address_valid() {
        let address = parse_bind_address("127.0.0.1", 3000).unwrap();
        assert_eq!(address, SocketAddr::from(([127, 0, 0, 1], 3000)));
    }

    #[test]
    fn test_parse_bind_address_invalid_host() {
        let result = parse_bind_address("not a host", 3000);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_user_error());
    }

    #[tokio::test]
    async fn test_demo_widget_search_flow() {
        let widget = build_widget(&MarqueeConfig::default(), true);

        widget.update_query("Heat").await;
        let handle = widget.trigger_search().await.expect("dispatched");
        handle.await.expect("search task");

        // The demo catalog has three entries; one has no poster.
        let cards = widget.visible_cards().await;
        assert_eq!(cards.len(), 2);
    }

    #[tokio::test]
    async fn test_live_widget_requires_credential() {
        let widget = build_widget(&MarqueeConfig::default(), false);

        widget.update_query("Heat").await;
        assert!(widget.trigger_search().await.is_none());
        assert_eq!(
            widget.search_state().await,
            SearchState::Errored("API key is missing".to_string())
        );
    }
}
