//! Model Context Protocol (MCP) server.
//!
//! Exposes key lookup, reading and writing to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool implementations and the stdio entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{NeonkeyMcpServer, run_server};
