//! Client Classification
//!
//! Decides whether a caller is a graphical browser (structured client) or a
//! plain agent such as curl (raw client), from its User-Agent alone.

/// User-Agent substrings that mark a graphical browser engine
pub const BROWSER_MARKERS: [&str; 4] = ["Mozilla", "Firefox", "Chrome", "Safari"];

/// Signature of a pluggable client classifier.
pub type ClientClassifier = fn(&str) -> bool;

/// Returns true if `user_agent` looks like a graphical browser.
///
/// Matching is case-sensitive; an empty header is a raw client.
pub fn is_rich_client(user_agent: &str) -> bool {
    BROWSER_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
}
