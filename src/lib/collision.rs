use std::path::{Path, PathBuf};

/// Find a destination path in `directory` for `filename` that does not
/// currently exist.
///
/// The first candidate is `<directory>/<filename>`; while that is occupied,
/// a numeric suffix is inserted before the extension: "name (1).mp3",
/// "name (2).mp3", and so on. The counter is unbounded, so a directory
/// pre-seeded with every "name (n)" variant would keep this probing forever;
/// nothing short of that pathological layout makes it loop.
///
/// Only existence checks are performed here; nothing is created or moved.
pub fn resolve_destination(directory: &Path, filename: &str) -> PathBuf {
    let candidate = directory.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let name = Path::new(filename);
    let stem = name
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let ext = name
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    let mut counter = 1;
    loop {
        let candidate = directory.join(format!("{stem} ({counter}){ext}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
