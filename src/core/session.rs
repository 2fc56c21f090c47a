//! Edit sessions: read every translation of one key, then save changes back.
//!
//! A session is opened for a single resolved key. It snapshots the value
//! each candidate file holds for that key and applies a batch of per-locale
//! updates on `save`, which consumes the session.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use super::{
    CandidateFile, DottedKey,
    neon::{WriteOutcome, locate, value_at, write_value},
    selector::file_domain,
};
use crate::utils::atomic_write;

/// The value one locale file holds for a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    pub locale: String,
    /// Empty when the key is not defined in this file.
    pub value: String,
    pub path: PathBuf,
    /// 0-based line of the definition, `None` when undefined.
    pub line: Option<usize>,
}

impl TranslationEntry {
    pub fn is_defined(&self) -> bool {
        self.line.is_some()
    }
}

/// Resolve `key` in one candidate file.
pub fn read_entry(candidate: &CandidateFile, key: &DottedKey) -> Result<TranslationEntry> {
    let content = fs::read_to_string(&candidate.path)
        .with_context(|| format!("Failed to read file: {}", candidate.path.display()))?;
    Ok(entry_from_content(candidate, key, &content))
}

fn entry_from_content(candidate: &CandidateFile, key: &DottedKey, content: &str) -> TranslationEntry {
    let line = locate(content, &candidate.search_key(key));
    let value = line
        .and_then(|l| value_at(content, l))
        .unwrap_or_default();

    TranslationEntry {
        locale: candidate.locale.clone(),
        value,
        path: candidate.path.clone(),
        line,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteAction {
    Updated,
    Appended,
}

impl WriteAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteAction::Updated => "updated",
            WriteAction::Appended => "appended",
        }
    }
}

/// A value that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedEntry {
    pub locale: String,
    pub path: PathBuf,
    /// 0-based line now holding the value.
    pub line: usize,
    pub action: WriteAction,
}

/// A file skipped because its definition line could not be rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MalformedEntry {
    pub locale: String,
    pub path: PathBuf,
    pub line: usize,
}

/// Outcome of [`EditSession::save`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReport {
    pub saved: Vec<SavedEntry>,
    pub malformed: Vec<MalformedEntry>,
    /// Locales with no matching file for this key.
    pub unknown_locales: Vec<String>,
    /// Locales whose new value was empty and therefore ignored.
    pub skipped_empty: Vec<String>,
}

impl SaveReport {
    pub fn has_failures(&self) -> bool {
        !self.malformed.is_empty() || !self.unknown_locales.is_empty()
    }
}

/// Translations of one key across its candidate files.
#[derive(Debug)]
pub struct EditSession {
    key: DottedKey,
    entries: Vec<TranslationEntry>,
}

impl EditSession {
    /// Read `key` from every candidate, keeping the candidates' order.
    pub fn open(key: DottedKey, candidates: &[CandidateFile]) -> Result<Self> {
        let entries = candidates
            .iter()
            .map(|c| read_entry(c, &key))
            .collect::<Result<Vec<_>>>()?;
        debug!("Opened session for {} with {} file(s)", key, entries.len());
        Ok(Self { key, entries })
    }

    pub fn key(&self) -> &DottedKey {
        &self.key
    }

    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// First entry for `locale`.
    pub fn entry(&self, locale: &str) -> Option<&TranslationEntry> {
        self.entries.iter().find(|e| e.locale == locale)
    }

    /// Write `updates` (locale to new value) and end the session.
    ///
    /// Empty values are ignored so a blank field never clears a translation.
    /// Files are re-read before writing so edits made since `open` survive.
    pub fn save(self, updates: &BTreeMap<String, String>) -> Result<SaveReport> {
        let mut report = SaveReport::default();

        for (locale, value) in updates {
            if value.trim().is_empty() {
                report.skipped_empty.push(locale.clone());
                continue;
            }
            let Some(entry) = self.entry(locale) else {
                warn!("No {} file for key {}", locale, self.key);
                report.unknown_locales.push(locale.clone());
                continue;
            };

            let content = fs::read_to_string(&entry.path)
                .with_context(|| format!("Failed to read file: {}", entry.path.display()))?;
            let outcome = write_value(&content, &self.key, file_domain(&entry.path), value);

            match outcome {
                WriteOutcome::Updated { line, content } => {
                    persist(&entry.path, &content)?;
                    report.saved.push(saved(entry, line, WriteAction::Updated));
                }
                WriteOutcome::Appended { line, content } => {
                    persist(&entry.path, &content)?;
                    report.saved.push(saved(entry, line, WriteAction::Appended));
                }
                WriteOutcome::Malformed { line } => {
                    warn!(
                        "Skipping {}: line {} cannot be rewritten",
                        entry.path.display(),
                        line + 1
                    );
                    report.malformed.push(MalformedEntry {
                        locale: locale.clone(),
                        path: entry.path.clone(),
                        line,
                    });
                }
            }
        }

        Ok(report)
    }
}

fn saved(entry: &TranslationEntry, line: usize, action: WriteAction) -> SavedEntry {
    SavedEntry {
        locale: entry.locale.clone(),
        path: entry.path.clone(),
        line,
        action,
    }
}

fn persist(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content)?;
    debug!("Wrote {}", path.display());
    Ok(())
}
