//! Issue types reported by `check`.
//!
//! Each issue is self-contained with everything the reporters (CLI, MCP)
//! need to display it.

use enum_dispatch::enum_dispatch;

use crate::core::SourceContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UndefinedKey,
    NoCandidateFiles,
    ReadError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UndefinedKey => write!(f, "undefined-key"),
            Rule::NoCandidateFiles => write!(f, "no-candidate-files"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Key referenced in a template but defined in none of its locale files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedKeyIssue {
    pub context: SourceContext,
    /// Fully-qualified key.
    pub key: String,
    /// Locale files that were searched.
    pub searched_files: Vec<String>,
}

impl UndefinedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UndefinedKey
    }
}

/// Key whose domain matches no locale file at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoCandidateFilesIssue {
    pub context: SourceContext,
    pub key: String,
    pub domain: String,
    pub hint: String,
}

impl NoCandidateFilesIssue {
    pub fn new(context: SourceContext, key: String, domain: String, extension: &str) -> Self {
        let hint = format!("create {}.<locale>.{} or check the key's first segment", domain, extension);
        Self {
            context,
            key,
            domain,
            hint,
        }
    }

    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::NoCandidateFiles
    }
}

/// Template or locale file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UndefinedKey(UndefinedKeyIssue),
    NoCandidateFiles(NoCandidateFilesIssue),
    ReadError(ReadErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UndefinedKey(_) => UndefinedKeyIssue::severity(),
            Issue::NoCandidateFiles(_) => NoCandidateFilesIssue::severity(),
            Issue::ReadError(_) => ReadErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UndefinedKey(_) => UndefinedKeyIssue::rule(),
            Issue::NoCandidateFiles(_) => NoCandidateFilesIssue::rule(),
            Issue::ReadError(_) => ReadErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Template location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (for ReadError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, error, etc.).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UndefinedKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("searched: {}", self.searched_files.join(", ")))
    }
}

impl Report for NoCandidateFilesIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some(&self.hint)
    }

    fn details(&self) -> Option<String> {
        Some(format!("no locale files for domain '{}'", self.domain))
    }
}

impl Report for ReadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
