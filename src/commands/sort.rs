use anyhow::Result;
use mfsort::classify::{classify, ParseResult};
use mfsort::collision::resolve_destination;
use mfsort::sanitize::sanitize_artist;
use mfsort::scan::scan_for_music_files;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Outcome of one sorting run, accumulated per file and returned to the
/// caller instead of being kept in any global state.
#[derive(Debug, Default)]
pub struct SortReport {
    /// Files successfully moved into an artist folder
    pub moved: usize,
    /// Files whose name did not follow the "Artist - Title" convention
    pub unparseable: usize,
    /// Files whose artist segment sanitized down to nothing
    pub undeterminable: usize,
    /// Files that hit an OS error (directory creation or rename)
    pub failed: usize,
    /// Files already at their computed destination, left in place
    pub already_sorted: usize,
    /// Moves per sanitized artist name
    pub per_artist: FxHashMap<String, usize>,
}

/// Sort loose music files under `root` into per-artist subfolders.
///
/// Every per-file problem is reported and skipped; only an unusable root
/// aborts the run, and then before any file has been touched. Files are
/// moved, never copied or deleted, and a file is moved at most once.
pub fn sort_by_artist(root: &Path, dry_run: bool, quiet: bool) -> Result<SortReport> {
    if !root.exists() {
        return Err(anyhow::anyhow!(
            "Directory '{}' does not exist",
            root.display()
        ));
    }
    if !root.is_dir() {
        return Err(anyhow::anyhow!(
            "'{}' is not a directory",
            root.display()
        ));
    }

    if !quiet {
        info!("🔍 Scanning music directory: {}", root.display());
    }

    let scan = scan_for_music_files(root)?;

    if !quiet {
        info!("✅ Found {} music files to sort", scan.music_files.len());
        if scan.files_skipped > 0 {
            info!(
                "ℹ️  Found {} non-music files (will be left in place)",
                scan.files_skipped
            );
        }
    }

    let mut report = SortReport::default();

    for file_path in &scan.music_files {
        let file_name = match file_path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => {
                warn!("⚠️  Skipping file with unreadable name: {}", file_path.display());
                report.unparseable += 1;
                continue;
            }
        };

        let raw_artist = match classify(file_name) {
            ParseResult::Matched(raw) => raw,
            ParseResult::Unmatched => {
                warn!("⚠️  Name does not match 'Artist - Title': {file_name}");
                report.unparseable += 1;
                continue;
            }
        };

        let artist = sanitize_artist(&raw_artist);
        if artist.is_empty() {
            warn!("⚠️  Could not determine artist for: {file_name}");
            report.undeterminable += 1;
            continue;
        }

        let artist_dir = root.join(&artist);

        // A file already sitting in its artist folder stays put; re-running
        // the sorter must not shuffle it into a "(1)" copy.
        if file_path.parent() == Some(artist_dir.as_path()) {
            report.already_sorted += 1;
            continue;
        }

        if dry_run {
            if !quiet {
                info!("📄 Would move: {file_name} -> {artist}/");
            }
            report.moved += 1;
            *report.per_artist.entry(artist).or_default() += 1;
            continue;
        }

        if let Err(e) = fs::create_dir_all(&artist_dir) {
            warn!("❌ Failed to create folder '{artist}': {e}");
            report.failed += 1;
            continue;
        }

        let dest_path = resolve_destination(&artist_dir, file_name);

        match fs::rename(file_path, &dest_path) {
            Ok(()) => {
                if !quiet {
                    info!("✅ Moved: {file_name} -> {artist}/");
                }
                report.moved += 1;
                *report.per_artist.entry(artist).or_default() += 1;
            }
            Err(e) => {
                warn!("❌ Failed to move '{file_name}': {e}");
                report.failed += 1;
            }
        }
    }

    if !quiet {
        if dry_run {
            info!("🎭 This was a dry run. No files were actually moved.");
        }
        info!(
            "🎉 Done! Moved {} files into {} artist folders",
            report.moved,
            report.per_artist.len()
        );
    }

    Ok(report)
}
