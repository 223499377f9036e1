//! Server-side rendering of the dashboard view into HTML and inline SVG.

pub mod html;
pub mod svg;

pub use html::render_page;
pub use svg::render_chart;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
