//! Full page handlers using the component system
//!
//! Pages compose components into complete HTML responses. All pages share
//! the same base layout with HTMX and Tailwind CSS loaded from CDNs.

pub mod search;

use axum::response::Html;

use crate::components::layout;

pub use search::search_page;

/// Renders a page with the base template.
pub fn render_page(title: &str, active_nav: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{title} - Marquee</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'marquee': {{
                                    50: '#fff7ed',
                                    400: '#fb923c',
                                    500: '#f97316',
                                    600: '#ea580c',
                                    900: '#0a0a0a'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
            <style>
                .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
                .htmx-request .htmx-indicator {{ opacity: 1; }}
                .htmx-request.htmx-indicator {{ opacity: 1; }}
            </style>
        </head>
        <body class="bg-gray-900 text-gray-100 min-h-screen">
            {nav}
            <main class="max-w-7xl mx-auto px-4 py-8">
                {content}
            </main>
        </body>
        </html>"#,
        nav = layout::nav_bar(active_nav),
    );

    Html(html)
}
