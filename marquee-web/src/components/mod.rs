//! Reusable HTML components for the HTMX + Tailwind UI
//!
//! Components are server-rendered HTML fragments usable in full pages or as
//! HTMX partial updates. All styling uses Tailwind CSS.

pub mod layout;
pub mod movie;

// Re-export main component functions
pub use layout::{button, card, grid, input, nav_bar, page_header};
pub use movie::{error_banner, loading_indicator, movie_card, results_grid, search_results};

/// Escapes text for safe embedding in HTML content and attribute values.
///
/// Everything rendered into the page that originates from the user or the
/// external API goes through here.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Fast & Furious"), "Fast &amp; Furious");
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
