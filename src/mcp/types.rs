use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    core::{CandidateFile, SaveReport, TranslationEntry},
    utils::display_path,
};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocateKeyParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Dotted key, e.g. "admin.dashboard.title". Omit when giving templatePath.
    pub key: Option<String>,
    /// Template containing the reference, relative to the project root
    pub template_path: Option<String>,
    /// 1-based line of the reference in templatePath
    pub line: Option<u32>,
    /// 1-based column of the reference in templatePath
    pub column: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTranslationsParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Fully-qualified dotted key
    pub key: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetTranslationsParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Fully-qualified dotted key
    pub key: String,
    /// Locale tag to new value, e.g. {"cs": "Ahoj", "en": "Hello"}. Empty values are ignored.
    pub translations: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanReferencesParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Only scan this template (relative to the project root)
    pub template_path: Option<String>,
    /// Only return references without a definition (default: false)
    pub undefined_only: Option<bool>,
    /// Maximum number of items to return (default: 50, max: 200)
    pub limit: Option<u32>,
    /// Number of items to skip (default: 0)
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub root_path: String,
    pub default_locale_tag: Option<String>,
    pub translation_model: String,
    pub translation_api_url: String,
    /// The key itself is never returned
    pub has_translation_api_key: bool,
    pub neon_extension: String,
    pub template_extension: String,
    pub ignores: Vec<String>,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            has_translation_api_key: c
                .translation_api_key
                .as_deref()
                .is_some_and(|k| !k.trim().is_empty()),
            root_path: c.root_path,
            default_locale_tag: c.default_locale_tag,
            translation_model: c.translation_model,
            translation_api_url: c.translation_api_url,
            neon_extension: c.neon_extension,
            template_extension: c.template_extension,
            ignores: c.ignores,
        }
    }
}

// ============================================================
// Locate Types (locate_key)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocateKeyResult {
    pub key: String,
    pub found: bool,
    pub location: Option<LocationDto>,
    /// Files searched, in lookup order
    pub candidates: Vec<CandidateDto>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    /// Relative to the project root
    pub file_path: String,
    /// 1-based
    pub line: usize,
    pub locale: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDto {
    pub file_path: String,
    pub locale: String,
}

impl CandidateDto {
    pub fn new(candidate: &CandidateFile, base: &std::path::Path) -> Self {
        Self {
            file_path: display_path(&candidate.path, base),
            locale: candidate.locale.clone(),
        }
    }
}

// ============================================================
// Translation Types (get_translations, set_translations)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationsResult {
    pub key: String,
    pub entries: Vec<TranslationDto>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationDto {
    pub locale: String,
    /// Empty when not defined
    pub value: String,
    pub defined: bool,
    pub file_path: String,
    /// 1-based, absent when not defined
    pub line: Option<usize>,
}

impl TranslationDto {
    pub fn new(entry: &TranslationEntry, base: &std::path::Path) -> Self {
        Self {
            locale: entry.locale.clone(),
            value: entry.value.clone(),
            defined: entry.is_defined(),
            file_path: display_path(&entry.path, base),
            line: entry.line.map(|l| l + 1),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetTranslationsResult {
    /// True if every non-empty value was written
    pub success: bool,
    pub key: String,
    pub results: Vec<LocaleResult>,
    pub skipped_empty: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleResult {
    pub locale: String,
    /// "updated", "appended", "malformed" or "unknown_locale"
    pub action: String,
    pub file_path: Option<String>,
    /// 1-based
    pub line: Option<usize>,
}

impl SetTranslationsResult {
    pub fn new(key: String, report: SaveReport, base: &std::path::Path) -> Self {
        let mut results: Vec<LocaleResult> = report
            .saved
            .iter()
            .map(|s| LocaleResult {
                locale: s.locale.clone(),
                action: s.action.as_str().to_string(),
                file_path: Some(display_path(&s.path, base)),
                line: Some(s.line + 1),
            })
            .collect();
        results.extend(report.malformed.iter().map(|m| LocaleResult {
            locale: m.locale.clone(),
            action: "malformed".to_string(),
            file_path: Some(display_path(&m.path, base)),
            line: Some(m.line + 1),
        }));
        results.extend(report.unknown_locales.iter().map(|locale| LocaleResult {
            locale: locale.clone(),
            action: "unknown_locale".to_string(),
            file_path: None,
            line: None,
        }));

        Self {
            success: !report.has_failures(),
            key,
            results,
            skipped_empty: report.skipped_empty,
        }
    }
}

// ============================================================
// Scan Types (scan_references)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanReferencesResult {
    pub template_count: usize,
    pub total_count: usize,
    pub undefined_count: usize,
    pub items: Vec<ReferenceItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceItem {
    pub file_path: String,
    /// 1-based
    pub line: usize,
    /// 1-based
    pub column: usize,
    /// Key as written in the macro
    pub raw_key: String,
    /// Key after namespace qualification
    pub full_key: String,
    pub absolute: bool,
    pub modifiers: Vec<String>,
    /// "defined", "undefined" or "no_candidate_files"
    pub status: String,
    /// Definition site when defined
    pub definition: Option<LocationDto>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
