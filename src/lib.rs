//! i18nctl - translation catalog manager
//!
//! i18nctl keeps a set of per-language JSON translation catalogs structurally
//! aligned: keys are added, renamed and removed in every language at once,
//! drift between catalogs is reported, and keys no source file uses are found
//! by scanning for `t()` calls.
//!
//! ## Module Structure
//!
//! - `catalog`: nested key model, storage and multi-language mutations
//! - `analysis`: catalog reconciliation and source usage scanning
//! - `translate`: machine translation collaborator
//! - `config`: configuration file loading and parsing
//! - `workspace`: a project opened from its configuration
//! - `cli`: command-line interface layer
//! - `mcp`: Model Context Protocol server implementation

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod mcp;
pub mod translate;
pub mod workspace;
