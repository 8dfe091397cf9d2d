//! Integration tests for Marquee
//!
//! These tests verify the widget search flow against scripted providers, the
//! TMDB provider against a local stub server, and the web UI end to end over
//! real HTTP.

#[path = "integration/support.rs"]
mod support;

#[path = "integration/tmdb_provider.rs"]
mod tmdb_provider;

#[path = "integration/web_search.rs"]
mod web_search;

#[path = "integration/widget_flow.rs"]
mod widget_flow;
