//! Namespace resolution for relative template keys.
//!
//! `{translator admin}` ... `{/translator}` prefixes every relative key in its
//! body with `admin.`. Snippets cut that context: a key inside a snippet that
//! is still open at the key's position has no namespace, even when the
//! snippet sits lexically inside a translator block.
//!
//! The search walks backward from the key's line, counting closing markers
//! before opening markers on each line, and stops at the nearest enclosing
//! translator.

use std::sync::LazyLock;

use regex::Regex;

static TRANSLATOR_OPEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{translator\s+(?:"([\w.]+)"|'([\w.]+)'|([\w.]+))\s*\}"#).unwrap()
});

static TRANSLATOR_CLOSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{/translator\}").unwrap());

static SNIPPET_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{snippet\s+\w+\s*\}|n:snippet=").unwrap());

static SNIPPET_CLOSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{/snippet\}").unwrap());

/// Whether snippet boundaries sever the translator scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetMode {
    /// Only translator markers are considered (definition lookup).
    Ignore,
    /// An enclosing open snippet yields no namespace (reference scanning).
    Sever,
}

/// State of a backward namespace search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeState {
    Searching,
    Found(String),
    SeveredBySnippet,
}

impl ScopeState {
    pub fn is_done(&self) -> bool {
        !matches!(self, ScopeState::Searching)
    }
}

/// Backward scanner over template lines, fed from the key line upward.
#[derive(Debug)]
pub struct NamespaceScan {
    mode: SnippetMode,
    open_translators: i32,
    open_snippets: i32,
    state: ScopeState,
}

impl NamespaceScan {
    pub fn new(mode: SnippetMode) -> Self {
        Self {
            mode,
            open_translators: 0,
            open_snippets: 0,
            state: ScopeState::Searching,
        }
    }

    pub fn state(&self) -> &ScopeState {
        &self.state
    }

    /// Process the next line going backward.
    pub fn feed(&mut self, line: &str) -> &ScopeState {
        if self.state.is_done() {
            return &self.state;
        }

        self.open_translators -= TRANSLATOR_CLOSE_REGEX.find_iter(line).count() as i32;

        if self.mode == SnippetMode::Sever {
            self.open_snippets -= SNIPPET_CLOSE_REGEX.find_iter(line).count() as i32;
            if SNIPPET_OPEN_REGEX.is_match(line) {
                self.open_snippets += 1;
                if self.open_snippets > 0 {
                    self.state = ScopeState::SeveredBySnippet;
                    return &self.state;
                }
            }
        }

        if let Some(caps) = TRANSLATOR_OPEN_REGEX.captures(line) {
            self.open_translators += 1;
            if self.open_translators > 0 {
                let name = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .or_else(|| caps.get(3))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                self.state = ScopeState::Found(name);
            }
        }

        &self.state
    }

    pub fn into_namespace(self) -> Option<String> {
        match self.state {
            ScopeState::Found(name) => Some(name),
            ScopeState::Searching | ScopeState::SeveredBySnippet => None,
        }
    }
}

/// Namespace active at `from_line` (0-based, inclusive), if any.
pub fn resolve_namespace(lines: &[&str], from_line: usize, mode: SnippetMode) -> Option<String> {
    scan(lines, from_line, None, mode)
}

/// Like [`resolve_namespace`], but only the text before `column` (a byte
/// offset) counts on the starting line.
pub fn resolve_namespace_at(
    lines: &[&str],
    from_line: usize,
    column: usize,
    mode: SnippetMode,
) -> Option<String> {
    scan(lines, from_line, Some(column), mode)
}

fn scan(lines: &[&str], from_line: usize, column: Option<usize>, mode: SnippetMode) -> Option<String> {
    if lines.is_empty() {
        return None;
    }
    let from_line = from_line.min(lines.len() - 1);
    let mut scan = NamespaceScan::new(mode);

    for index in (0..=from_line).rev() {
        let mut line = lines[index];
        if index == from_line
            && let Some(column) = column
        {
            line = line.get(..column).unwrap_or(line);
        }
        if scan.feed(line).is_done() {
            break;
        }
    }

    scan.into_namespace()
}
