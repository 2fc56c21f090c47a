use std::path::PathBuf;

use crate::{
    cli::ExitStatus,
    core::{SaveReport, TranslationEntry},
    issues::Issue,
    translate::Translations,
};

#[derive(Debug)]
pub enum CommandSummary {
    Locate(LocateSummary),
    Show(ShowSummary),
    Set(SetSummary),
    Translate(TranslateSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct LocateSummary {
    pub key: String,
    /// `path:line` with a 1-based line, `None` when not defined.
    pub location: Option<String>,
    pub candidate_count: usize,
}

#[derive(Debug)]
pub struct ShowSummary {
    pub key: String,
    /// Paths are relative to `base` for display.
    pub base: PathBuf,
    pub entries: Vec<TranslationEntry>,
}

#[derive(Debug)]
pub struct SetSummary {
    pub key: String,
    pub base: PathBuf,
    pub candidate_count: usize,
    pub report: SaveReport,
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub key: String,
    pub base: PathBuf,
    pub source_locale: String,
    pub text: String,
    pub translations: Translations,
    /// Present when the translations were written.
    pub report: Option<SaveReport>,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub template_count: usize,
    pub reference_count: usize,
    pub locale_file_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a neonkey command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Issues found by `check`; empty for other commands.
    pub issues: Vec<Issue>,
    pub exit_status: ExitStatus,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, exit_status: ExitStatus) -> Self {
        Self {
            summary,
            issues: Vec::new(),
            exit_status,
        }
    }
}
