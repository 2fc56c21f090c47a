//! Common utility functions shared across the codebase.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Replace `path` with `content` without ever leaving a partially written file.
///
/// The content goes to a temporary file in the same directory, which is then
/// renamed over the target. Permissions of an existing target are kept.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
    temp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write temp file for {}", path.display()))?;

    if let Ok(metadata) = fs::metadata(path) {
        // Best effort; a failure here still leaves a valid file.
        let _ = fs::set_permissions(temp.path(), metadata.permissions());
    }

    temp.persist(path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;
    Ok(())
}

/// Path relative to `base` when possible, for display.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use neonkey::utils::display_path;
///
/// assert_eq!(display_path(Path::new("/p/app/admin.neon"), Path::new("/p")), "app/admin.neon");
/// assert_eq!(display_path(Path::new("/q/admin.neon"), Path::new("/p")), "/q/admin.neon");
/// ```
pub fn display_path(path: &Path, base: &Path) -> String {
    let relative: PathBuf = path.strip_prefix(base).unwrap_or(path).to_path_buf();
    relative.to_string_lossy().replace('\\', "/")
}

/// 1-based character column of a byte offset within `line`.
pub fn char_column(line: &str, byte: usize) -> usize {
    line.get(..byte).map_or(byte, |prefix| prefix.chars().count()) + 1
}
