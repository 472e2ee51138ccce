use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a `locales/` directory and an optional
/// `.i18nrc.json`.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        // Stop config discovery at the project root
        fs::create_dir_all(project_root.join(".git"))?;
        fs::create_dir_all(project_root.join("locales"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a project configured with `catalogs`; the first language is the source.
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_catalogs(vec![
    ///     ("en-us", "English", json!({"key": "value"})),
    ///     ("pt-pt", "Portuguese", json!({"key": "valor"})),
    /// ])?;
    /// ```
    pub fn with_catalogs(catalogs: Vec<(&str, &str, Value)>) -> Result<Self> {
        let fixture = Self::new()?;
        let languages: serde_json::Map<String, Value> = catalogs
            .iter()
            .map(|(code, name, _)| (code.to_string(), Value::from(*name)))
            .collect();
        fixture.write_config(&json!({
            "languages": languages,
            "sourceLanguage": catalogs[0].0,
        }))?;
        for (code, _, content) in &catalogs {
            fixture.write_catalog(code, content)?;
        }
        Ok(fixture)
    }

    /// Write a catalog to locales/<code>.json
    pub fn write_catalog(&self, code: &str, content: &Value) -> Result<()> {
        let path = self.catalog_path(code);
        let json_str = serde_json::to_string_pretty(content)
            .with_context(|| format!("Failed to serialize JSON for language: {}", code))?;
        fs::write(&path, format!("{}\n", json_str))
            .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
        Ok(())
    }

    /// Read a catalog from locales/<code>.json
    pub fn read_catalog(&self, code: &str) -> Result<Value> {
        let path = self.catalog_path(code);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from: {}", path.display()))
    }

    /// Write a source file to scan for key usage
    pub fn write_source_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write source file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .i18nrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".i18nrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }

    fn catalog_path(&self, code: &str) -> PathBuf {
        self.project_root
            .join("locales")
            .join(format!("{}.json", code))
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Three languages with the same keys
pub fn fixture_in_sync() -> Result<McpTestFixture> {
    McpTestFixture::with_catalogs(vec![
        (
            "en-us",
            "English",
            json!({"common": {"submit": "Submit", "cancel": "Cancel"}, "home": {"title": "Welcome"}}),
        ),
        (
            "pt-pt",
            "Portuguese",
            json!({"common": {"submit": "Enviar", "cancel": "Cancelar"}, "home": {"title": "Bem-vindo"}}),
        ),
        (
            "de-de",
            "German",
            json!({"common": {"submit": "Senden", "cancel": "Abbrechen"}, "home": {"title": "Willkommen"}}),
        ),
    ])
}

/// A translation that lags behind the source language
pub fn fixture_with_drift() -> Result<McpTestFixture> {
    McpTestFixture::with_catalogs(vec![
        (
            "en-us",
            "English",
            json!({"common": {"submit": "Submit", "cancel": "Cancel", "retry": "Retry"}}),
        ),
        (
            "pt-pt",
            "Portuguese",
            json!({"common": {"submit": "Enviar"}}),
        ),
    ])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
