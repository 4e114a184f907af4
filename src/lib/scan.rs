use crate::is_music_file;
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of scanning a directory tree for music files
pub struct ScanResult {
    pub music_files: Vec<PathBuf>,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

/// Recursively collect music files under `root`.
///
/// Unreadable directory entries are dropped from the walk; everything else is
/// counted, and non-music files are tallied as skipped but otherwise ignored.
pub fn scan_for_music_files(root: &Path) -> Result<ScanResult> {
    let mut music_files = Vec::new();
    let mut files_scanned = 0;
    let mut files_skipped = 0;

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.path().is_file() {
            continue;
        }

        files_scanned += 1;

        if is_music_file(entry.path()) {
            music_files.push(entry.path().to_path_buf());
        } else {
            files_skipped += 1;
        }
    }

    Ok(ScanResult {
        music_files,
        files_scanned,
        files_skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_finds_music_files_recursively() -> Result<()> {
        let tmp_dir = tempdir()?;
        let sub_dir = tmp_dir.path().join("nested").join("deeper");
        fs::create_dir_all(&sub_dir)?;

        fs::write(tmp_dir.path().join("a.mp3"), b"test")?;
        fs::write(tmp_dir.path().join("b.FLAC"), b"test")?;
        fs::write(sub_dir.join("c.ogg"), b"test")?;
        fs::write(tmp_dir.path().join("readme.txt"), b"test")?;
        fs::write(sub_dir.join("cover.jpg"), b"test")?;

        let mut result = scan_for_music_files(tmp_dir.path())?;
        result.music_files.sort();

        assert_eq!(
            result.music_files,
            vec![
                tmp_dir.path().join("a.mp3"),
                tmp_dir.path().join("b.FLAC"),
                sub_dir.join("c.ogg"),
            ]
        );
        assert_eq!(result.files_scanned, 5);
        assert_eq!(result.files_skipped, 2);

        Ok(())
    }

    #[test]
    fn test_scan_empty_directory() -> Result<()> {
        let tmp_dir = tempdir()?;
        let result = scan_for_music_files(tmp_dir.path())?;

        assert!(result.music_files.is_empty());
        assert_eq!(result.files_scanned, 0);
        assert_eq!(result.files_skipped, 0);

        Ok(())
    }
}
