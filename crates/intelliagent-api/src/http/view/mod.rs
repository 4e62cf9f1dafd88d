//! Server-rendered HTML for the workflow page.
//!
//! Markup is built with `format!` over escaped values. The result card
//! follows the `CardView` model from `intelliagent-core`.

pub mod card;
pub mod page;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
