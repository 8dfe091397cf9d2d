//! Movie result components - cards, the results grid, status fragments

use marquee_search::{MovieCard, SearchState};

use super::{escape_html, layout};

/// Renders the loading indicator shown while a search is in flight.
pub fn loading_indicator() -> String {
    r#"<div class="flex items-center justify-center py-12 text-gray-400">
        <div class="w-8 h-8 border-4 border-gray-700 border-t-marquee-500 rounded-full animate-spin"></div>
        <span class="ml-4">Loading...</span>
    </div>"#
        .to_string()
}

/// Renders a search failure with the fixed "Error: " prefix.
pub fn error_banner(message: &str) -> String {
    format!(
        r#"<p class="text-red-400 text-center py-12">Error: {}</p>"#,
        escape_html(message)
    )
}

/// Renders one movie card: poster, title, release date, rating, overview.
pub fn movie_card(card: &MovieCard) -> String {
    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg overflow-hidden flex flex-col">
            <img src="{poster}" alt="{title}" class="w-full object-cover">
            <div class="p-4 space-y-2">
                <h2 class="text-lg font-semibold text-white">{title}</h2>
                <p class="text-sm text-gray-400">Release Date: {release_date}</p>
                <p class="text-sm text-gray-400">Rating: {rating}</p>
                <p class="text-sm text-gray-300">{overview}</p>
            </div>
        </div>"#,
        poster = escape_html(&card.poster_url),
        title = escape_html(&card.title),
        release_date = escape_html(&card.release_date),
        rating = escape_html(&card.rating),
        overview = escape_html(&card.overview),
    )
}

/// Renders the card grid for a list of visible results.
pub fn results_grid(cards: &[MovieCard]) -> String {
    let items: String = cards.iter().map(movie_card).collect();
    layout::grid("grid-cols-1 sm:grid-cols-2 lg:grid-cols-4", &items)
}

/// Renders the results area for the current search state.
///
/// Loading suppresses results and errors; an error suppresses results;
/// otherwise the visible cards are shown (empty grid included).
pub fn search_results(state: &SearchState, cards: &[MovieCard]) -> String {
    match state {
        SearchState::Loading => loading_indicator(),
        SearchState::Errored(message) => error_banner(message),
        SearchState::Idle | SearchState::Loaded(_) => results_grid(cards),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> MovieCard {
        MovieCard {
            id: Some(1),
            title: "The Matrix".to_string(),
            release_date: "3/31/1999".to_string(),
            rating: "8.70".to_string(),
            poster_url: "https://image.tmdb.org/t/p/w185_and_h278_bestv2/m.jpg".to_string(),
            overview: "A hacker learns the truth.".to_string(),
        }
    }

    #[test]
    fn test_movie_card_renders_all_fields() {
        let html = movie_card(&card());

        assert!(html.contains("The Matrix"));
        assert!(html.contains("Release Date: 3/31/1999"));
        assert!(html.contains("Rating: 8.70"));
        assert!(html.contains(r#"src="https://image.tmdb.org/t/p/w185_and_h278_bestv2/m.jpg""#));
        assert!(html.contains("A hacker learns the truth."));
    }

    #[test]
    fn test_movie_card_escapes_api_text() {
        let mut malicious = card();
        malicious.title = "<img onerror=x>".to_string();

        let html = movie_card(&malicious);
        assert!(!html.contains("<img onerror"));
        assert!(html.contains("&lt;img onerror=x&gt;"));
    }

    #[test]
    fn test_search_results_error_branch_has_prefix() {
        let html = search_results(&SearchState::Errored("Failed to fetch movies".into()), &[]);
        assert!(html.contains("Error: Failed to fetch movies"));
    }

    #[test]
    fn test_search_results_loading_branch_suppresses_cards() {
        let html = search_results(&SearchState::Loading, &[card()]);
        assert!(!html.contains("The Matrix"));
        assert!(html.contains("Loading"));
    }
}
