//! Counter key and the text served at `/`.

/// The single key holding the visit counter in the store.
pub const COUNTER_KEY: &str = "page_views";

/// Fixed body for any store failure. Never templated.
pub const APOLOGY: &str = "Sorry, something went wrong \u{1F614}";

/// Success body for a counter value returned by the store.
///
/// The value is rendered as-is, including zero or negative numbers.
pub fn render_views(views: i64) -> String {
    format!("\u{1F389} This page has been viewed {views} times! Thanks for visiting!")
}
