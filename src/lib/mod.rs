//! # Music File Sorter Core Library
//!
//! This library contains the logic shared by the mfsort binary: the filename
//! classifier that recognizes "Artist - Title" names, the artist-name
//! sanitizer, the destination collision resolver, and the directory scanner
//! that finds candidate music files.

pub mod classify;
pub mod collision;
pub mod sanitize;
pub mod scan;

use std::path::Path;

/// Music file extensions recognized by the sorter, matched case-insensitively.
/// Files with any other extension are never classified or moved.
pub const MUSIC_EXTENSIONS: &[&str] = &["mp3", "flac", "wav", "aac", "ogg", "m4a", "wma"];

/// Check if a file path has a recognized music extension
pub fn is_music_file<P: AsRef<Path>>(path: P) -> bool {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    MUSIC_EXTENSIONS.contains(&ext.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_music_file() {
        assert!(is_music_file("test.mp3"));
        assert!(is_music_file("test.flac"));
        assert!(is_music_file("test.MP3")); // Case insensitive
        assert!(is_music_file("test.FLAC")); // Case insensitive
        assert!(is_music_file("some/dir/test.ogg"));
        assert!(!is_music_file("test.txt"));
        assert!(!is_music_file("test.jpg"));
        assert!(!is_music_file("test"));
    }

    #[test]
    fn test_all_listed_extensions_accepted() {
        for ext in MUSIC_EXTENSIONS {
            assert!(is_music_file(format!("song.{ext}")));
        }
    }
}
