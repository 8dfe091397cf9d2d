//! Marquee Web - HTMX + Tailwind web UI for movie search
//!
//! Serves the search page with server-side rendering, HTMX partial updates
//! for the search flow, and a JSON endpoint for external clients.

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::too_many_lines)]

pub mod components;
pub mod handlers;
pub mod pages;
pub mod server;

// Re-export main types
pub use server::{AppState, WebServerConfig, build_router, run_server};
