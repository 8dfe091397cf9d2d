//! Marquee Search - Movie search and display projection
//!
//! Query state, the search lifecycle state machine, and the optional-aware
//! result types behind the Marquee movie search UI. Search backends are
//! pluggable through [`MovieSearchProvider`]; the production backend talks
//! to TMDB.

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]

pub mod errors;
pub mod providers;
pub mod types;
pub mod widget;

// Re-export main types
pub use errors::MovieSearchError;
pub use providers::{DevelopmentProvider, MovieSearchProvider, TmdbProvider};
pub use types::{MovieCard, MovieResult, SearchState};
pub use widget::MovieSearchWidget;

/// Convenience type alias for Results with MovieSearchError.
pub type Result<T> = std::result::Result<T, MovieSearchError>;
