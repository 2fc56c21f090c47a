use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use glob::Pattern;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::CONFIG_FILE_NAME;

/// Dependency, build and log directories that never hold project sources.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "vendor", "temp", "log"];

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted by path.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Collect files with `extension` under `root`.
///
/// `ignore_patterns` are globs matched against the path relative to `root`.
pub fn scan_files(root: &Path, extension: &str, ignore_patterns: &[String]) -> Result<ScanResult> {
    if !root.exists() {
        bail!(
            "Root directory '{}' does not exist.\n\
             Hint: Check your {} 'rootPath' setting.",
            root.display(),
            CONFIG_FILE_NAME
        );
    }
    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => warn!("Invalid ignore pattern '{}': {}", p, e),
        }
    }

    let mut result = ScanResult::default();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                debug!("Cannot access path: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(extension)
        {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if glob_patterns.iter().any(|p| p.matches_path(relative)) {
            continue;
        }

        result.files.push(path.to_path_buf());
    }

    debug!(
        "Found {} .{} file(s) under {}",
        result.files.len(),
        extension,
        root.display()
    );
    Ok(result)
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}
