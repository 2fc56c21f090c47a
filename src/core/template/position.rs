//! Resolving an editor position in a template file to a dotted key.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::{SnippetMode, reference_at};
use crate::core::DottedKey;

/// Fully-qualified key referenced at a 1-based `line`/`column` of a template.
///
/// Columns count characters. Snippet blocks do not hide the enclosing
/// translator scope here, matching how definitions are looked up from an
/// editor.
pub fn key_at(template: &Path, line: usize, column: Option<usize>) -> Result<DottedKey> {
    let source = fs::read_to_string(template)
        .with_context(|| format!("Failed to read template: {}", template.display()))?;
    let line_index = line.saturating_sub(1);
    let byte_column = column.map(|c| {
        let text = source.lines().nth(line_index).unwrap_or_default();
        char_to_byte(text, c.saturating_sub(1))
    });

    let Some(reference) = reference_at(&source, line_index, byte_column, SnippetMode::Ignore) else {
        bail!(
            "No translation macro at {}:{}{}",
            template.display(),
            line,
            column.map(|c| format!(":{}", c)).unwrap_or_default()
        );
    };
    debug!("Reference {:?} resolves to {}", reference.raw_key, reference.full_key());
    Ok(DottedKey::parse(reference.full_key().trim())?)
}

/// Byte offset of the `char_index`-th character, clamped to the line end.
fn char_to_byte(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}
