//! Core data types shared by the CLI and MCP layers.
//!
//! ## Module Structure
//!
//! - `source`: Template location types (SourceContext, SourceLocation)

pub mod source;

pub use source::{SourceContext, SourceLocation};
