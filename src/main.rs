use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

mod commands;

use commands::sort::sort_by_artist;

#[derive(Parser)]
#[command(author, version, about = "Sort music files into per-artist folders", long_about = None)]
struct Cli {
    /// Directory to sort; prompted for interactively when omitted
    directory: Option<String>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
    /// Show what would be done without making changes
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    println!("=== Music file sorter ===");
    println!();

    let raw_path = match cli.directory {
        Some(path) => path,
        None => prompt("Enter the folder path: ")?,
    };

    let root = resolve_root(&raw_path)?;
    println!("✅ Found folder: {}", root.display());

    if !cli.yes && !cli.dry_run {
        let answer = prompt("\n⚠️  Sort music files by artist? (y/N): ")?;
        if !is_affirmative(&answer) {
            println!("❌ Cancelled");
            return Ok(());
        }
    }

    println!("\n🔍 Scanning and sorting...");
    println!("══════════════════════════════════════════");

    let report = sort_by_artist(&root, cli.dry_run, false)?;

    println!("══════════════════════════════════════════");
    if cli.dry_run {
        println!("✅ Dry run complete. Files that would move: {}", report.moved);
    } else {
        println!("✅ Done! Files sorted: {}", report.moved);
    }

    let skipped = report.unparseable + report.undeterminable + report.failed;
    if skipped > 0 {
        info!(
            "ℹ️  Skipped {} files ({} unparseable, {} with no usable artist, {} OS errors)",
            skipped, report.unparseable, report.undeterminable, report.failed
        );
    }

    Ok(())
}

/// Read one trimmed line from stdin after printing `message`
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}

/// Accepts y/yes and the Cyrillic д/да, case-insensitively
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes" | "д" | "да")
}

/// Validate the user-supplied path and resolve it to an absolute directory.
/// Tolerates surrounding double quotes (drag-and-drop on some platforms
/// pastes the path quoted) and a leading tilde.
fn resolve_root(raw: &str) -> Result<PathBuf> {
    let mut path = raw.trim();

    if path.is_empty() {
        return Err(anyhow::anyhow!(
            "No path given.\nUsage:\n  1. Drag a folder onto the program\n  2. Or run: mfsort \"/path/to/music\""
        ));
    }

    if path.len() >= 2 && path.starts_with('"') && path.ends_with('"') {
        path = &path[1..path.len() - 1];
    }

    let expanded = shellexpand::tilde(path).into_owned();
    let root = PathBuf::from(&expanded)
        .canonicalize()
        .with_context(|| format!("Cannot access '{expanded}'"))?;

    if !root.is_dir() {
        return Err(anyhow::anyhow!("'{}' is not a folder", root.display()));
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("д"));
        assert!(is_affirmative("Да"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_resolve_root_strips_quotes() -> Result<()> {
        let tmp_dir = tempdir()?;
        let quoted = format!("\"{}\"", tmp_dir.path().display());

        let root = resolve_root(&quoted)?;
        assert_eq!(root, tmp_dir.path().canonicalize()?);

        Ok(())
    }

    #[test]
    fn test_resolve_root_rejects_empty() {
        assert!(resolve_root("").is_err());
        assert!(resolve_root("   ").is_err());
    }

    #[test]
    fn test_resolve_root_rejects_missing_path() {
        assert!(resolve_root("/nonexistent/music/dir").is_err());
    }

    #[test]
    fn test_resolve_root_rejects_file() -> Result<()> {
        let tmp_dir = tempdir()?;
        let file_path = tmp_dir.path().join("song.mp3");
        fs::write(&file_path, b"test")?;

        assert!(resolve_root(file_path.to_str().unwrap()).is_err());

        Ok(())
    }
}
