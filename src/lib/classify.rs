use once_cell::sync::Lazy;
use regex::Regex;

/// Outcome of classifying a filename against the "Artist - Title" convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    /// The filename follows the convention; carries the raw artist segment,
    /// trimmed but not yet sanitized.
    Matched(String),
    /// The filename does not follow the convention and must be left alone.
    Unmatched,
}

/// Expected shape: "Artist - Title.ext" or "Artist - Album - Title.ext".
/// The artist is everything before the first hyphen; the remainder may
/// contain further hyphens but no dot other than the extension dot.
static ARTIST_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^-]+?)\s*-\s*[^.]+\.\w+$").unwrap());

/// Extract the raw artist segment from a filename.
///
/// Pure string matching; extension filtering happens before this is called,
/// so a well-shaped name with an unrecognized extension would still match.
pub fn classify(filename: &str) -> ParseResult {
    match ARTIST_TITLE.captures(filename) {
        Some(caps) => ParseResult::Matched(caps[1].trim().to_string()),
        None => ParseResult::Unmatched,
    }
}
