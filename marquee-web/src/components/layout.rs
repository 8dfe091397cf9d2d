//! Layout components - headers, cards, containers, navigation

use super::escape_html;

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Renders a card container with an optional header.
///
/// Styled container with consistent padding and borders, used for grouping
/// related content.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| format!(r#"<h3 class="text-lg font-semibold text-white mb-6">{t}</h3>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders the main navigation bar.
///
/// Highlights the active page based on the provided page identifier.
pub fn nav_bar(active_page: &str) -> String {
    let nav_item = |href: &str, label: &str, page: &str| {
        let active_class = if page == active_page {
            "text-marquee-500 bg-marquee-500 bg-opacity-10"
        } else {
            "text-gray-300 hover:text-marquee-500 hover:bg-gray-700"
        };

        format!(
            r#"<a href="{href}" class="px-3 py-2 rounded-md text-sm font-medium transition-colors {active_class}">{label}</a>"#
        )
    };

    format!(
        r#"<nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center h-16 space-x-8">
                    <div class="text-2xl font-bold text-marquee-500">Marquee</div>
                    <div class="flex space-x-6">
                        {}
                    </div>
                </div>
            </div>
        </nav>"#,
        nav_item("/search", "Search", "search")
    )
}

/// Renders a grid container for responsive layouts.
///
/// Use Tailwind grid column classes like "grid-cols-1 lg:grid-cols-3".
pub fn grid(columns: &str, content: &str) -> String {
    format!(r#"<div class="grid {columns} gap-6">{content}</div>"#)
}

/// Renders a button with Tailwind styling.
///
/// Supports predefined variants (primary, secondary) and additional HTML
/// attributes for custom behavior.
pub fn button(text: &str, variant: &str, attributes: Option<&str>) -> String {
    let base_classes = "px-4 py-2 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900 disabled:opacity-50";

    let variant_classes = match variant {
        "primary" => "bg-marquee-500 hover:bg-marquee-600 text-white focus:ring-marquee-500",
        _ => "bg-gray-700 hover:bg-gray-600 text-white focus:ring-gray-500",
    };

    let attributes = attributes.unwrap_or_default();

    format!(
        r#"<button class="{base_classes} {variant_classes}" {attributes}>{text}</button>"#
    )
}

/// Renders a text input bound to a form field.
///
/// The value is escaped for attribute embedding; extra attributes pass
/// through verbatim.
pub fn input(name: &str, value: &str, placeholder: &str, attributes: Option<&str>) -> String {
    let attributes = attributes.unwrap_or_default();

    format!(
        r#"<input type="text" name="{name}" value="{}" placeholder="{placeholder}" class="bg-gray-900 border border-gray-700 rounded-lg px-4 py-2 text-white placeholder-gray-500 focus:outline-none focus:border-marquee-500 flex-1" {attributes}>"#,
        escape_html(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_highlights_active_page() {
        let nav = nav_bar("search");
        assert!(nav.contains("text-marquee-500 bg-marquee-500"));
    }

    #[test]
    fn test_input_escapes_value() {
        let html = input("query", r#""><script>"#, "Search for a movie", None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
