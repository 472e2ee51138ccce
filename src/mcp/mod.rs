//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the catalog and analysis engines to AI coding agents over stdio.
//!
//! ## Module Structure
//!
//! - `server`: tool definitions and the stdio entry point
//! - `types`: tool parameters and JSON results

mod server;
pub mod types;

pub use server::{I18nMcpServer, run_server};
