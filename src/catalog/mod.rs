//! Catalog model and the multi-language mutation protocol.
//!
//! ## Module Structure
//!
//! - `path_tree`: nested tree addressed by dotted key paths
//! - `key_path`: key path and language code validation
//! - `set`: configured languages and loaded catalogs
//! - `storage`: one-file-per-language persistence
//! - `conflict`: overwrite policy for existing keys
//! - `store`: add / rename / remove / add-language across all catalogs

mod conflict;
mod error;
mod key_path;
mod path_tree;
mod set;
mod storage;
mod store;

pub use conflict::{ConfirmOverwrite, ConflictPolicy};
pub use error::CatalogError;
pub use key_path::{validate_key_path, validate_language_code};
pub use path_tree::{Entry, Leaf, PathTree};
pub use set::{Catalog, CatalogSet, Language};
pub use storage::{CatalogStorage, JsonFileStorage};
pub use store::{
    AddLanguageReport, CatalogStore, KeyChange, KeyChangeReport, KeyOutcome, LeafRemoval,
    MoveReport,
};
