use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{KeyChangeReport, KeyOutcome, MoveReport, PathTree},
    config::Config,
};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root (where .i18nrc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetStatusParams {
    /// Absolute path of the project root (where .i18nrc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanUnusedParams {
    /// Absolute path of the project root (where .i18nrc.json lives)
    pub project_root_path: String,
    /// Maximum number of keys to return (default 50, max 200)
    pub limit: Option<u32>,
    /// Number of keys to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetMissingTemplateParams {
    /// Absolute path of the project root (where .i18nrc.json lives)
    pub project_root_path: String,
    /// Target language code, e.g. "pt-pt"
    pub language: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenameKeyParams {
    /// Absolute path of the project root (where .i18nrc.json lives)
    pub project_root_path: String,
    /// Current dotted key path (leaf or subtree)
    pub old_key: String,
    /// New dotted key path
    pub new_key: String,
    /// Replace the new key if it already exists
    pub force: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveKeyParams {
    /// Absolute path of the project root (where .i18nrc.json lives)
    pub project_root_path: String,
    /// Dotted key path to remove from every language
    pub key: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetTranslationsParams {
    /// Absolute path of the project root (where .i18nrc.json lives)
    pub project_root_path: String,
    /// Dotted key path, e.g. "button.save"
    pub key: String,
    /// Language code to text, e.g. {"en-us": "Save", "pt-pt": "Guardar"}
    pub values: BTreeMap<String, String>,
    /// Replace existing values (default false: existing values are kept)
    pub overwrite: Option<bool>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub locales_dir: String,
    pub source_root: String,
    pub config: Config,
}

// ============================================================
// Status Types (get_status)
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    pub source_language: String,
    /// Number of distinct keys across all catalogs
    pub total_keys: usize,
    /// True when every catalog holds the same keys
    pub in_sync: bool,
    pub languages: Vec<LanguageStatus>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStatus {
    pub code: String,
    pub display_name: String,
    pub key_count: usize,
    /// Keys other catalogs have but this one lacks
    pub missing_keys: Vec<String>,
    /// Percentage of source keys present; absent for the source language
    pub completeness: Option<f64>,
}

// ============================================================
// Unused Types (scan_unused)
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusedScanResult {
    pub scanned_files: usize,
    pub unreadable_files: usize,
    pub usage_rate: f64,
    pub total_count: usize,
    pub items: Vec<String>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Template Types (get_missing_template)
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingTemplateResult {
    pub language: String,
    pub source_language: String,
    pub missing_count: usize,
    /// Nested object of missing keys holding the source values
    pub template: PathTree,
}

// ============================================================
// Mutation Types (rename_key, remove_key, set_translations)
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResult {
    /// Languages whose catalog was changed
    pub updated: Vec<String>,
    /// Languages that did not have the key
    pub skipped: Vec<String>,
}

impl From<MoveReport> for MoveResult {
    fn from(report: MoveReport) -> Self {
        Self {
            updated: report.updated,
            skipped: report.skipped,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTranslationsResult {
    pub key: String,
    pub written_count: usize,
    pub skipped_count: usize,
    pub changes: Vec<LanguageChange>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageChange {
    pub language: String,
    /// "added", "updated" or "skipped"
    pub outcome: String,
}

impl SetTranslationsResult {
    pub fn new(key: &str, report: &KeyChangeReport) -> Self {
        Self {
            key: key.to_string(),
            written_count: report.written_count(),
            skipped_count: report.skipped_count(),
            changes: report
                .changes
                .iter()
                .map(|change| LanguageChange {
                    language: change.language_code.clone(),
                    outcome: match &change.outcome {
                        KeyOutcome::Added => "added".to_string(),
                        KeyOutcome::Updated => "updated".to_string(),
                        KeyOutcome::Skipped => "skipped".to_string(),
                        KeyOutcome::TranslationFailed(reason) => format!("failed: {}", reason),
                    },
                })
                .collect(),
        }
    }
}
