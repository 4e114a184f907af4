use once_cell::sync::Lazy;
use regex::Regex;

/// Decorative markers stripped from a raw artist segment, applied in order.
/// The order matters: trailing-group rules run before the collaboration
/// suffixes so that "Artist (Live) ft. Other" loses both layers, and each
/// later rule assumes the earlier noise is already gone.
static STRIP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Track-index prefix: "[01] Artist"
        Regex::new(r"^\[\d+\]\s*").unwrap(),
        // Numeric prefix: "12. Artist"
        Regex::new(r"^\d+\.\s*").unwrap(),
        // Trailing parenthesized group: "Artist (Live)"
        Regex::new(r"\s+\([^)]*\)$").unwrap(),
        // Trailing bracketed group: "Artist [Remastered]"
        Regex::new(r"\s+\[[^\]]*\]$").unwrap(),
        // Collaboration suffixes: everything from the marker onward goes
        Regex::new(r"\s+ft\.\s+.*$").unwrap(),
        Regex::new(r"\s+feat\.\s+.*$").unwrap(),
        Regex::new(r"\s+vs\.\s+.*$").unwrap(),
    ]
});

/// Turn a raw artist segment into a folder-safe name.
///
/// Strips decorative prefixes/suffixes, then substitutes characters that are
/// illegal in a path component. Never fails; an empty result means the artist
/// could not be determined and the caller must skip the file rather than
/// create a folder with an empty name.
pub fn sanitize_artist(raw: &str) -> String {
    let mut name = raw.trim().to_string();

    for pattern in STRIP_PATTERNS.iter() {
        name = pattern.replace_all(&name, "").into_owned();
    }

    name.replace(':', " -")
        .replace('/', " & ")
        .replace('\\', " & ")
        .replace('?', "")
        .replace('*', "")
        .replace('"', "'")
        .replace('<', "(")
        .replace('>', ")")
        .replace('|', "-")
        .trim()
        .to_string()
}
