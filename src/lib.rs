//! Neonkey - translation key tooling for Latte templates and NEON locale files
//!
//! Neonkey resolves `{_key}` macros in Latte templates to the line that
//! defines them in `<domain>.<locale>.neon` files, reads and writes a key
//! across every locale, fills missing locales through an OpenAI-compatible
//! API and reports keys that are used but never defined.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Key resolution and locale file editing engine
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `translate`: Machine translation client
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod translate;
pub mod utils;
