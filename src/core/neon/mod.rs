//! Line-oriented access to NEON locale files.
//!
//! This is not a NEON parser. It understands just enough of the format to
//! find the line defining a leaf key through nested mappings, read its scalar
//! value, and rewrite or append that value without touching the rest of the
//! file.
//!
//! ## Module Structure
//!
//! - `resolver`: Indentation-stack key resolution (`locate`)
//! - `value`: Scalar value reading and quoting
//! - `writer`: In-place value replacement and append fallback

pub mod resolver;
pub mod value;
pub mod writer;

pub use resolver::{
    IndentedLine, KeyStack, KeyStackFrame, indented_lines, locate, parse_key,
    strip_bom,
};
pub use value::{quote_value, read_value};
pub use writer::{WriteOutcome, write_value};

/// Read the value stored at `line`, if that line exists and has a separator.
pub fn value_at(content: &str, line: usize) -> Option<String> {
    strip_bom(content).lines().nth(line).and_then(read_value)
}
