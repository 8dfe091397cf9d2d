//! Data types for movie search results and their display projection.

use serde::{Deserialize, Serialize};

/// One movie record from a search response.
///
/// Every field is optional: the external API omits fields freely, and a
/// malformed entry must surface as blanks at render time rather than as an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieResult {
    /// Unique identifier, used as the list rendering key
    pub id: Option<u64>,
    /// Movie title
    pub title: Option<String>,
    /// ISO-like release date string, e.g. "1999-03-31"
    pub release_date: Option<String>,
    /// Average vote on a 0-10 scale
    pub vote_average: Option<f64>,
    /// Poster image path; absence means the entry is not displayed
    pub poster_path: Option<String>,
    /// Synopsis text
    pub overview: Option<String>,
}

impl MovieResult {
    /// Whether this entry carries a poster and should be displayed.
    pub fn has_poster(&self) -> bool {
        self.poster_path.as_deref().is_some_and(|path| !path.is_empty())
    }

    /// Sort key for the descending release-date ordering.
    ///
    /// Lexicographic on the raw date string, not calendar-aware. Absent or
    /// empty dates compare smallest and therefore land at the end of the
    /// descending view.
    pub fn release_sort_key(&self) -> &str {
        self.release_date.as_deref().unwrap_or("")
    }
}

/// Search lifecycle status driving the visible UI.
///
/// Exactly one variant holds at a time; transitions are driven entirely by
/// the widget's search operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// No search has been triggered yet
    Idle,
    /// A request is in flight; results and errors are suppressed
    Loading,
    /// The last search failed; holds the user-visible message
    Errored(String),
    /// The last search succeeded; holds the raw, unvalidated result set
    Loaded(Vec<MovieResult>),
}

impl SearchState {
    /// Whether a search request is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }
}

/// Fully formatted movie card, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCard {
    /// Rendering key carried over from the result record
    pub id: Option<u64>,
    /// Title text, blank when absent
    pub title: String,
    /// Local date representation of the release date
    pub release_date: String,
    /// Rating formatted to exactly two decimal places, blank when absent
    pub rating: String,
    /// Absolute poster image URL
    pub poster_url: String,
    /// Synopsis, verbatim
    pub overview: String,
}

impl MovieCard {
    /// Formats one result record into a card.
    pub fn from_result(result: &MovieResult, image_base_url: &str) -> Self {
        Self {
            id: result.id,
            title: result.title.clone().unwrap_or_default(),
            release_date: result
                .release_date
                .as_deref()
                .map(format_release_date)
                .unwrap_or_default(),
            rating: result
                .vote_average
                .map(|rating| format!("{rating:.2}"))
                .unwrap_or_default(),
            poster_url: format!(
                "{image_base_url}{}",
                result.poster_path.as_deref().unwrap_or_default()
            ),
            overview: result.overview.clone().unwrap_or_default(),
        }
    }
}

/// Projects a loaded result set into display order.
///
/// Pure function of the result set: keep entries with a present, non-empty
/// poster path, sort by release date descending, and format each survivor as
/// a card. The sort is stable, so entries with equal dates keep response
/// order.
pub fn project_cards(results: &[MovieResult], image_base_url: &str) -> Vec<MovieCard> {
    let mut visible: Vec<&MovieResult> = results.iter().filter(|m| m.has_poster()).collect();
    visible.sort_by(|a, b| b.release_sort_key().cmp(a.release_sort_key()));

    visible
        .into_iter()
        .map(|result| MovieCard::from_result(result, image_base_url))
        .collect()
}

/// Formats an ISO-like date as a local date representation (`M/D/YYYY`).
///
/// A string that does not parse as a date passes through verbatim.
fn format_release_date(raw: &str) -> String {
    match chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
