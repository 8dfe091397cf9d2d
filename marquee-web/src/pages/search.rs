//! Search page - the movie search widget

use axum::extract::State;
use axum::response::Html;

use crate::components::{layout, movie};
use crate::pages::render_page;
use crate::server::AppState;

/// Renders the search page with the current widget state.
///
/// The form drives the HTMX fragment endpoint; while a request is in flight
/// the submit button is disabled and the spinner indicator fades in.
pub async fn search_page(State(state): State<AppState>) -> Html<String> {
    let query = state.widget.query().await;
    let search_state = state.widget.search_state().await;
    let cards = state.widget.visible_cards().await;

    let search_form = format!(
        r##"<form hx-get="/htmx/search"
                hx-target="#results"
                hx-swap="innerHTML"
                hx-indicator="#search-spinner"
                hx-disabled-elt="#search-submit"
                class="flex space-x-4">
            {}
            {}
        </form>
        <div id="search-spinner" class="htmx-indicator mt-4 text-gray-400">Searching...</div>"##,
        layout::input("query", &query, "Search for a movie", None),
        layout::button("Search", "primary", Some(r#"type="submit" id="search-submit""#)),
    );

    let content = format!(
        r#"{header}
        {form_card}
        <div id="results">
            {results}
        </div>"#,
        header = layout::page_header("Movie Search", Some("Find your favorite movies!")),
        form_card = layout::card(Some("Search"), &search_form),
        results = movie::search_results(&search_state, &cards),
    );

    render_page("Search", "search", &content)
}
