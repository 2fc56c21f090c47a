//! Writing values back into NEON documents.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{locate, quote_value, strip_bom};
use crate::core::DottedKey;

/// `<indent><key><sep><spaces>` followed by the old value.
///
/// Quoted keys do not match; such lines are reported as malformed.
static VALUE_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\sA-Za-z0-9_.-]+[:=]\s*)(.*)$").unwrap());

/// How a write changed (or did not change) a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// An existing definition was rewritten in place.
    Updated { line: usize, content: String },
    /// No definition existed; a flattened dotted entry was appended.
    Appended { line: usize, content: String },
    /// The definition line could not be split into prefix and value.
    Malformed { line: usize },
}

impl WriteOutcome {
    /// The updated document, `None` when nothing was written.
    pub fn content(&self) -> Option<&str> {
        match self {
            WriteOutcome::Updated { content, .. } | WriteOutcome::Appended { content, .. } => {
                Some(content)
            }
            WriteOutcome::Malformed { .. } => None,
        }
    }

    fn with_prefix(self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self;
        }
        match self {
            WriteOutcome::Updated { line, content } => WriteOutcome::Updated {
                line,
                content: format!("{}{}", prefix, content),
            },
            WriteOutcome::Appended { line, content } => WriteOutcome::Appended {
                line,
                content: format!("{}{}", prefix, content),
            },
            malformed => malformed,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            WriteOutcome::Updated { line, .. }
            | WriteOutcome::Appended { line, .. }
            | WriteOutcome::Malformed { line } => *line,
        }
    }
}

/// Set `key` to `value` in `content`.
///
/// `file_domain` is the domain token of the file the document came from; the
/// definition is looked up with that domain stripped from `key`. When the key
/// is not defined, `key: "value"` is appended using the full, unstripped key.
/// A leading byte order mark is kept in the output.
pub fn write_value(
    content: &str,
    key: &DottedKey,
    file_domain: Option<&str>,
    value: &str,
) -> WriteOutcome {
    let search_key = match file_domain {
        Some(domain) => key.strip_domain(domain),
        None => key.clone(),
    };

    let body = strip_bom(content);
    let bom = &content[..content.len() - body.len()];

    let outcome = match locate(body, &search_key) {
        Some(line) => replace_line_value(body, line, value),
        None => append_entry(body, key, value),
    };
    outcome.with_prefix(bom)
}

fn replace_line_value(content: &str, target: usize, value: &str) -> WriteOutcome {
    let mut out = String::with_capacity(content.len() + value.len());

    for (index, raw) in content.split_inclusive('\n').enumerate() {
        if index != target {
            out.push_str(raw);
            continue;
        }

        let (body, ending) = split_line_ending(raw);
        let Some(caps) = VALUE_LINE_REGEX.captures(body) else {
            debug!(line = target, "value pattern did not match: {}", body);
            return WriteOutcome::Malformed { line: target };
        };

        out.push_str(&caps[1]);
        out.push_str(&quote_value(value));
        out.push_str(ending);
    }

    WriteOutcome::Updated {
        line: target,
        content: out,
    }
}

fn append_entry(content: &str, key: &DottedKey, value: &str) -> WriteOutcome {
    let entry = format!("{}: {}", key, quote_value(value));
    let line = content.lines().count();

    let content = if content.is_empty() {
        format!("{}\n", entry)
    } else if content.ends_with("\r\n") {
        format!("{}{}\r\n", content, entry)
    } else if content.ends_with('\n') {
        format!("{}{}\n", content, entry)
    } else {
        format!("{}\n{}", content, entry)
    };

    WriteOutcome::Appended { line, content }
}

fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(body) = raw.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = raw.strip_suffix('\n') {
        (body, "\n")
    } else {
        (raw, "")
    }
}
