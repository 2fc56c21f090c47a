//! Key resolution and locale file editing engine.
//!
//! Control flow for a template reference: the namespace resolver qualifies
//! the key, the selector narrows the locale files by domain, the resolver
//! finds the defining line in each file and the writer patches it.
//!
//! ## Module Structure
//!
//! - `data`: Template location types
//! - `file_scanner`: Locale and template file discovery
//! - `key`: Dotted key type
//! - `neon`: Line-oriented NEON resolution, reading and writing
//! - `selector`: Candidate locale files for a key
//! - `session`: Read-all / save-all edit sessions
//! - `template`: Latte macro extraction and namespace scopes
//! - `workspace`: Configured project view

pub mod data;
pub mod file_scanner;
pub mod key;
pub mod neon;
pub mod selector;
pub mod session;
pub mod template;
pub mod workspace;

pub use data::{SourceContext, SourceLocation};
pub use file_scanner::{ScanResult, scan_files};
pub use key::{DottedKey, InvalidKey};
pub use selector::{CandidateFile, DomainFileSelector, UNKNOWN_LOCALE};
pub use session::{EditSession, SaveReport, TranslationEntry, WriteAction};
pub use template::{KeyReference, SnippetMode};
pub use workspace::{KeyStatus, LocaleIndex, ResolvedLocation, Workspace, find_definition};
