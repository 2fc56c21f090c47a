//! Latte template analysis.
//!
//! ## Module Structure
//!
//! - `namespace`: Backward `{translator}` / snippet scope search
//! - `references`: `{_key}` macro extraction and qualification
//! - `position`: Template line/column to key

pub mod namespace;
pub mod position;
pub mod references;

pub use namespace::{
    NamespaceScan, ScopeState, SnippetMode, resolve_namespace, resolve_namespace_at,
};
pub use position::key_at;
pub use references::{KeyReference, extract_references, reference_at};
