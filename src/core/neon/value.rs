//! Reading and encoding scalar values on key/value lines.

/// Extract the value of a key-defining line.
///
/// Everything after the first `:` or `=` is the value. Surrounding quotes
/// are removed and double-quoted escapes are decoded. Returns `None` when the
/// line has no separator.
pub fn read_value(line: &str) -> Option<String> {
    let sep = line.find([':', '='])?;
    let raw = line[sep + 1..].trim();

    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return Some(unescape(&raw[1..raw.len() - 1]));
    }
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return Some(raw[1..raw.len() - 1].to_string());
    }
    Some(raw.to_string())
}

/// Render a value as a double-quoted NEON string.
pub fn quote_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
