//! Translation macro extraction from Latte templates.
//!
//! Recognized forms: `{_key}`, `{_'key'}`, `{_"key"}` and the absolute
//! `{_//key}`, each optionally followed by `|modifier` filters.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use super::namespace::{SnippetMode, resolve_namespace_at};

static KEY_MACRO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{_(/{0,2})(?:'([\w.]+)'|"([\w.]+)"|([\w.]+))(\|[^}]+)?\}"#).unwrap()
});

/// One translation macro occurrence in a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyReference {
    /// The key as written in the macro.
    pub raw_key: String,
    /// Written as `{_//key}`; exempt from namespace qualification.
    pub absolute: bool,
    /// 0-based line of the macro.
    pub line: usize,
    /// 0-based byte column of the macro's opening brace.
    pub column: usize,
    /// Byte length of the whole macro.
    pub len: usize,
    /// Filters after the key, e.g. `["upper", "truncate:10"]`.
    pub modifiers: Vec<String>,
    /// Enclosing `{translator}` namespace of a relative key.
    pub namespace: Option<String>,
}

impl KeyReference {
    /// The fully-qualified key.
    pub fn full_key(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.raw_key),
            _ => self.raw_key.clone(),
        }
    }

    fn contains_column(&self, column: usize) -> bool {
        column >= self.column && column < self.column + self.len
    }
}

/// All translation macros in `source`, in document order.
pub fn extract_references(source: &str, mode: SnippetMode) -> Vec<KeyReference> {
    let lines: Vec<&str> = source.lines().collect();
    let mut references = Vec::new();

    for (line_index, line) in lines.iter().enumerate() {
        for caps in KEY_MACRO_REGEX.captures_iter(line) {
            references.push(build_reference(&lines, line_index, &caps, mode));
        }
    }

    references
}

/// The macro covering `column` on `line`, or the first one on that line
/// when no column is given.
pub fn reference_at(
    source: &str,
    line: usize,
    column: Option<usize>,
    mode: SnippetMode,
) -> Option<KeyReference> {
    let lines: Vec<&str> = source.lines().collect();
    let text = lines.get(line)?;

    KEY_MACRO_REGEX
        .captures_iter(text)
        .map(|caps| build_reference(&lines, line, &caps, mode))
        .find(|reference| column.is_none_or(|c| reference.contains_column(c)))
}

fn build_reference(lines: &[&str], line: usize, caps: &Captures<'_>, mode: SnippetMode) -> KeyReference {
    let whole = caps.get(0).map(|m| (m.start(), m.len())).unwrap_or_default();
    let absolute = caps.get(1).is_some_and(|m| m.as_str() == "//");
    let raw_key = caps
        .get(2)
        .or_else(|| caps.get(3))
        .or_else(|| caps.get(4))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let modifiers = caps
        .get(5)
        .map(|m| {
            m.as_str()
                .split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let namespace = if absolute {
        None
    } else {
        resolve_namespace_at(lines, line, whole.0, mode)
    };

    KeyReference {
        raw_key,
        absolute,
        line,
        column: whole.0,
        len: whole.1,
        modifiers,
        namespace,
    }
}
