//! Key resolution inside NEON documents.
//!
//! NEON nests mappings by indentation. Instead of building a tree, the
//! resolver walks the document top to bottom and keeps the chain of
//! ancestor keys on an explicit stack of `(key, indent)` frames. A key path
//! is found on the first line where that chain equals the requested path.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::core::DottedKey;

/// Leading key token: bare or matching-quoted `[\w.-]+`, then `:` or `=`.
static KEY_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:"([A-Za-z0-9_.-]+)"|'([A-Za-z0-9_.-]+)'|([A-Za-z0-9_.-]+))\s*[:=]"#)
        .unwrap()
});

/// One non-blank, non-comment line of a NEON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentedLine<'a> {
    /// 0-based line number.
    pub line_number: usize,
    /// Byte offset of the first non-whitespace character.
    pub indent: usize,
    pub text: &'a str,
}

impl<'a> IndentedLine<'a> {
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    /// The key defined on this line, if it is a key-defining line.
    pub fn key(&self) -> Option<&'a str> {
        parse_key(self.trimmed())
    }
}

/// Iterate over the lines that can carry key semantics.
///
/// Blank lines and `#` comments are skipped; line numbers still count them.
/// A leading UTF-8 byte order mark is not part of the first line.
pub fn indented_lines(content: &str) -> impl Iterator<Item = IndentedLine<'_>> {
    strip_bom(content)
        .lines()
        .enumerate()
        .filter_map(|(line_number, text)| {
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let indent = text.len() - text.trim_start().len();
            Some(IndentedLine {
                line_number,
                indent,
                text,
            })
        })
}

/// Drop a leading UTF-8 byte order mark.
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Parse the key token at the start of an already trimmed line.
pub fn parse_key(trimmed: &str) -> Option<&str> {
    let caps = KEY_TOKEN_REGEX.captures(trimmed)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
}

/// A key and the indentation it was defined at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStackFrame<'a> {
    pub key: &'a str,
    pub indent: usize,
}

/// The chain of ancestor keys for the line currently being scanned.
#[derive(Debug, Default)]
pub struct KeyStack<'a> {
    frames: Vec<KeyStackFrame<'a>>,
}

impl<'a> KeyStack<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a frame after popping every sibling or deeper frame.
    pub fn push(&mut self, frame: KeyStackFrame<'a>) {
        while self
            .frames
            .last()
            .is_some_and(|top| top.indent >= frame.indent)
        {
            self.frames.pop();
        }
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[KeyStackFrame<'a>] {
        &self.frames
    }

    /// Whether the stack spells exactly `path`, one frame per segment.
    ///
    /// A dotted key on a single line (`dashboard.title: ...`) is one frame,
    /// so it never matches a two-segment path.
    pub fn matches(&self, path: &[String]) -> bool {
        self.frames.len() == path.len()
            && self
                .frames
                .iter()
                .zip(path)
                .all(|(frame, segment)| frame.key == segment.as_str())
    }
}

/// Find the 0-based line that defines `key_path`, first match wins.
///
/// The caller is responsible for stripping the domain segment when the
/// document belongs to a `<domain>.*` locale file.
pub fn locate(content: &str, key_path: &DottedKey) -> Option<usize> {
    let mut stack = KeyStack::new();

    for line in indented_lines(content) {
        let trimmed = line.trimmed();
        let Some(key) = parse_key(trimmed) else {
            if trimmed.contains(':') || trimmed.contains('=') {
                trace!(line = line.line_number, "line skipped (no key token): {}", trimmed);
            }
            continue;
        };

        stack.push(KeyStackFrame {
            key,
            indent: line.indent,
        });

        if stack.matches(key_path.segments()) {
            return Some(line.line_number);
        }
    }

    None
}
