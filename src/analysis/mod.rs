//! Read-only analysis over catalogs and source files.
//!
//! - `reconcile`: key-set diffs between languages and completeness
//! - `usage`: translation-call extraction and unused-key detection
//! - `file_scanner`: resolves the set of source files to scan

pub mod file_scanner;
pub mod reconcile;
pub mod usage;

pub use file_scanner::{FileListing, list_scannable_files};
pub use reconcile::{
    LanguageDiff, SourceGap, all_keys, completeness, incomplete_relative_to_source,
    missing_keys_template, per_language_diff,
};
pub use usage::{
    KeyUsage, ScanReport, UsageLocation, extract_key_usages, extract_keys_from_text,
    is_dynamic_key, scan_files, unused_keys, usage_rate,
};
