use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Recursively collect the files under `root` whose extension is in the
/// allow-list, skipping anything that matches an ignore pattern.
///
/// Unreadable directory entries and invalid patterns are warnings, not
/// errors; the walk keeps going. Results are sorted so processing order and
/// console output are deterministic.
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> Vec<PathBuf> {
    let mut patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let mut files: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if patterns.iter().any(|p| p.matches(&path.to_string_lossy())) {
            continue;
        }

        if path.is_file() && has_allowed_extension(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}

fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
