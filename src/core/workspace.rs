//! Project view used by the CLI and MCP layers.
//!
//! A [`Workspace`] ties the configuration to the files discovered under the
//! root directory. Candidate files are recomputed for every lookup.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use super::{
    CandidateFile, DomainFileSelector, DottedKey, EditSession,
    file_scanner::scan_files,
    neon::locate,
};
use crate::{config::Config, utils};

/// Where a key is defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
    pub path: PathBuf,
    /// 0-based line.
    pub line: usize,
    pub locale: String,
}

/// First definition of `key` across `candidates`, in their order.
pub fn find_definition(key: &DottedKey, candidates: &[CandidateFile]) -> Result<Option<ResolvedLocation>> {
    for candidate in candidates {
        let content = fs::read_to_string(&candidate.path)
            .with_context(|| format!("Failed to read file: {}", candidate.path.display()))?;
        if let Some(line) = locate(&content, &candidate.search_key(key)) {
            return Ok(Some(ResolvedLocation {
                path: candidate.path.clone(),
                line,
                locale: candidate.locale.clone(),
            }));
        }
        debug!("{} not defined in {}", key, candidate.path.display());
    }
    Ok(None)
}

/// Whether a key used in a template has a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyStatus {
    Defined(ResolvedLocation),
    /// Locale files exist for the domain but none defines the key.
    Undefined { candidates: Vec<CandidateFile> },
    NoCandidateFiles,
}

/// Locale file contents read once for many lookups.
#[derive(Debug, Default)]
pub struct LocaleIndex {
    contents: HashMap<PathBuf, String>,
}

impl LocaleIndex {
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Like [`find_definition`], without touching the disk. Files that
    /// could not be read are treated as defining nothing.
    pub fn find_definition(&self, key: &DottedKey, candidates: &[CandidateFile]) -> Option<ResolvedLocation> {
        candidates.iter().find_map(|candidate| {
            let content = self.contents.get(&candidate.path)?;
            let line = locate(content, &candidate.search_key(key))?;
            Some(ResolvedLocation {
                path: candidate.path.clone(),
                line,
                locale: candidate.locale.clone(),
            })
        })
    }
}

pub struct Workspace {
    project_dir: PathBuf,
    root: PathBuf,
    config: Config,
    selector: DomainFileSelector,
    locale_files: Vec<PathBuf>,
}

impl Workspace {
    /// Scan the configured root for locale files.
    pub fn load(project_dir: &Path, config: Config) -> Result<Self> {
        let root = config.root_dir(project_dir);
        let scan = scan_files(&root, &config.neon_extension, &config.ignores)?;
        let selector =
            DomainFileSelector::new(config.neon_extension.clone(), config.default_locale_tag.clone());

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            root,
            config,
            selector,
            locale_files: scan.files,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn locale_files(&self) -> &[PathBuf] {
        &self.locale_files
    }

    pub fn candidates(&self, key: &DottedKey) -> Vec<CandidateFile> {
        self.selector.select(&self.locale_files, key)
    }

    pub fn find_definition(&self, key: &DottedKey) -> Result<Option<ResolvedLocation>> {
        find_definition(key, &self.candidates(key))
    }

    pub fn open_session(&self, key: DottedKey) -> Result<EditSession> {
        let candidates = self.candidates(&key);
        EditSession::open(key, &candidates)
    }

    /// Status of `key` using already-read locale contents.
    pub fn key_status(&self, index: &LocaleIndex, key: &DottedKey) -> KeyStatus {
        let candidates = self.candidates(key);
        if candidates.is_empty() {
            return KeyStatus::NoCandidateFiles;
        }
        match index.find_definition(key, &candidates) {
            Some(location) => KeyStatus::Defined(location),
            None => KeyStatus::Undefined { candidates },
        }
    }

    /// Read every locale file, returning the ones that failed separately.
    pub fn index_locale_files(&self) -> (LocaleIndex, Vec<(PathBuf, io::Error)>) {
        let mut index = LocaleIndex::default();
        let mut failures = Vec::new();
        for path in &self.locale_files {
            match fs::read_to_string(path) {
                Ok(content) => {
                    index.contents.insert(path.clone(), content);
                }
                Err(e) => failures.push((path.clone(), e)),
            }
        }
        (index, failures)
    }

    /// Template files under the root, sorted by path.
    pub fn template_files(&self) -> Result<Vec<PathBuf>> {
        let scan = scan_files(&self.root, &self.config.template_extension, &self.config.ignores)?;
        Ok(scan.files)
    }

    /// `path` relative to the project directory, with forward slashes.
    pub fn display_path(&self, path: &Path) -> String {
        utils::display_path(path, &self.project_dir)
    }
}
