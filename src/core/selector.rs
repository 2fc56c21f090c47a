//! Selection of locale files for a key.
//!
//! Locale files follow `<domain>.<locale>.<ext>` (or `<domain>.<ext>`), so
//! the first key segment picks the file family and the filename yields the
//! locale tag.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::DottedKey;

/// Locale tag used when the filename does not carry one.
pub const UNKNOWN_LOCALE: &str = "unknown";

/// A locale file that may define a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub locale: String,
}

impl CandidateFile {
    pub fn new(path: impl Into<PathBuf>, extension: &str) -> Self {
        let path = path.into();
        let locale = infer_locale(&path, extension);
        Self { path, locale }
    }

    /// The domain token of this file (`admin` for `admin.cs_CZ.neon`).
    pub fn domain(&self) -> Option<&str> {
        file_domain(&self.path)
    }

    /// `key` as written inside this file, with the file's domain stripped.
    pub fn search_key(&self, key: &DottedKey) -> DottedKey {
        match self.domain() {
            Some(domain) => key.strip_domain(domain),
            None => key.clone(),
        }
    }
}

fn basename(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

/// The filename up to its first `.`.
pub fn file_domain(path: &Path) -> Option<&str> {
    basename(path).split('.').next().filter(|d| !d.is_empty())
}

/// Locale tag from a filename.
///
/// Examples with extension `neon`:
/// - `admin.cs_CZ.neon` -> `cs_CZ`
/// - `cs.neon` -> `cs`
/// - `admin.neon.dist` -> `unknown`
pub fn infer_locale(path: &Path, extension: &str) -> String {
    let parts: Vec<&str> = basename(path).split('.').collect();
    if parts.len() >= 2 && parts[parts.len() - 1] == extension {
        parts[parts.len() - 2].to_string()
    } else {
        UNKNOWN_LOCALE.to_string()
    }
}

/// Picks and ranks locale files for a key.
#[derive(Debug, Clone)]
pub struct DomainFileSelector {
    extension: String,
    default_locale: Option<String>,
}

impl DomainFileSelector {
    pub fn new(extension: impl Into<String>, default_locale: Option<String>) -> Self {
        Self {
            extension: extension.into(),
            default_locale: default_locale.filter(|l| !l.is_empty()),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Files of the key's domain, most relevant first.
    ///
    /// Ranking is two stable passes: files whose name contains the default
    /// locale first, then files whose path contains `lang` (usually a
    /// `lang/` directory) first. Ties keep input order.
    pub fn select<P: AsRef<Path>>(&self, files: &[P], key: &DottedKey) -> Vec<CandidateFile> {
        let domain = key.domain();
        let prefix = format!("{}.", domain);
        let exact = format!("{}.{}", domain, self.extension);

        let mut candidates: Vec<CandidateFile> = files
            .iter()
            .map(|p| -> &Path { p.as_ref() })
            .filter(|path| {
                let name = basename(path);
                name.starts_with(&prefix) || name == exact
            })
            .map(|path| CandidateFile::new(path, &self.extension))
            .collect();

        if let Some(locale) = &self.default_locale {
            candidates.sort_by_key(|c| !basename(&c.path).contains(locale.as_str()));
        }
        candidates.sort_by_key(|c| !c.path.to_string_lossy().contains("lang"));

        candidates
    }
}
