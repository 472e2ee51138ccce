use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    analysis::{
        all_keys, incomplete_relative_to_source, missing_keys_template, per_language_diff,
        scan_files, unused_keys, usage_rate,
    },
    catalog::{CatalogError, ConflictPolicy},
    config::load_config,
    workspace::{Workspace, WorkspaceOverrides},
};

use super::types::{
    ConfigDto, GetConfigParams, GetMissingTemplateParams, GetStatusParams, LanguageStatus,
    MissingTemplateResult, MoveResult, Pagination, RemoveKeyParams, RenameKeyParams,
    ScanUnusedParams, SetTranslationsParams, SetTranslationsResult, StatusResult,
    UnusedScanResult,
};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 200;

fn open_workspace(project_root_path: &str) -> Result<Workspace, McpError> {
    Workspace::open(
        Path::new(project_root_path),
        &WorkspaceOverrides::default(),
    )
    .map_err(|e| McpError::internal_error(format!("Failed to open project: {:#}", e), None))
}

/// Bad input (unknown key, malformed path) is the caller's to fix; storage
/// failures are internal.
fn catalog_error(err: CatalogError) -> McpError {
    match err {
        CatalogError::Read { .. }
        | CatalogError::Parse { .. }
        | CatalogError::Write { .. }
        | CatalogError::Serialize { .. } => McpError::internal_error(err.to_string(), None),
        _ => McpError::invalid_params(err.to_string(), None),
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[derive(Clone)]
pub struct I18nMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for I18nMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl I18nMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current i18nctl configuration
    #[tool(description = "Get the project configuration (languages, source language, directories).")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = Path::new(&params.0.project_root_path);

        let loaded = load_config(root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        let config_dto = ConfigDto {
            from_file: loaded.from_file(),
            locales_dir: loaded
                .base_dir
                .join(&loaded.config.locales_dir)
                .to_string_lossy()
                .to_string(),
            source_root: loaded
                .base_dir
                .join(&loaded.config.source_root)
                .to_string_lossy()
                .to_string(),
            config: loaded.config,
        };

        json_result(&config_dto)
    }

    /// Compare catalogs with each other and with the source language
    #[tool(
        description = "Get per-language status: keys missing compared to the other catalogs, and completeness against the source language. Use this first."
    )]
    pub async fn get_status(
        &self,
        params: Parameters<GetStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        let workspace = open_workspace(&params.0.project_root_path)?;
        let catalogs = workspace
            .store()
            .load_all(&workspace.set)
            .map_err(catalog_error)?;
        let source_code = workspace.set.source().code.clone();

        let diff = per_language_diff(&catalogs);
        let gaps = incomplete_relative_to_source(&catalogs, &source_code).map_err(catalog_error)?;

        let languages: Vec<LanguageStatus> = catalogs
            .iter()
            .map(|catalog| LanguageStatus {
                code: catalog.language_code.clone(),
                display_name: catalog.display_name.clone(),
                key_count: catalog.tree.keys().len(),
                missing_keys: diff
                    .get(&catalog.language_code)
                    .map(|d| d.missing_keys.iter().cloned().collect())
                    .unwrap_or_default(),
                completeness: gaps
                    .iter()
                    .find(|g| g.language_code == catalog.language_code)
                    .map(|g| g.completeness),
            })
            .collect();

        let result = StatusResult {
            source_language: source_code,
            total_keys: all_keys(&catalogs).len(),
            in_sync: languages.iter().all(|l| l.missing_keys.is_empty()),
            languages,
        };

        json_result(&result)
    }

    /// Find keys that no source file uses
    #[tool(
        description = "Scan source files for t()/$t()/i18n.t() calls and list catalog keys that are never used. Keys built dynamically (template literals, concatenation) are not detected. Returns a paginated list."
    )]
    pub async fn scan_unused(
        &self,
        params: Parameters<ScanUnusedParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params
            .0
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let workspace = open_workspace(&params.0.project_root_path)?;
        let listing = workspace.scannable_files();
        let scan = scan_files(&workspace.source_root, &listing.files);
        let catalogs = workspace
            .store()
            .load_all(&workspace.set)
            .map_err(catalog_error)?;

        let reference = all_keys(&catalogs);
        let unused = unused_keys(&reference, &scan.used_keys);
        let total_count = unused.len();

        let items: Vec<String> = unused.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        let result = UnusedScanResult {
            scanned_files: scan.scanned_count,
            unreadable_files: scan.error_count,
            usage_rate: usage_rate(&reference, &scan.used_keys),
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        json_result(&result)
    }

    /// Keys a language is missing, with source values to translate
    #[tool(
        description = "Get a nested JSON object of the keys a language is missing, filled with the source language values. Translate the values, then write them with set_translations."
    )]
    pub async fn get_missing_template(
        &self,
        params: Parameters<GetMissingTemplateParams>,
    ) -> Result<CallToolResult, McpError> {
        let workspace = open_workspace(&params.0.project_root_path)?;
        let language = &params.0.language;
        workspace.set.require(language).map_err(catalog_error)?;

        let catalogs = workspace
            .store()
            .load_all(&workspace.set)
            .map_err(catalog_error)?;
        let source_code = workspace.set.source().code.clone();
        let template =
            missing_keys_template(&catalogs, &source_code, language).map_err(catalog_error)?;

        let result = MissingTemplateResult {
            language: language.clone(),
            source_language: source_code,
            missing_count: template.keys().len(),
            template,
        };

        json_result(&result)
    }

    /// Rename a key in every language
    #[tool(
        description = "Rename a key (or a whole subtree) in every language catalog. Fails without changes if the old key does not exist, or if the new key exists and force is not set."
    )]
    pub async fn rename_key(
        &self,
        params: Parameters<RenameKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let workspace = open_workspace(&params.project_root_path)?;

        let report = workspace
            .store()
            .rename_key(
                &params.old_key,
                &params.new_key,
                &workspace.set,
                params.force.unwrap_or(false),
            )
            .map_err(catalog_error)?;

        json_result(&MoveResult::from(report))
    }

    /// Remove a key from every language
    #[tool(description = "Remove a key from every language catalog. Empty parent objects are removed too.")]
    pub async fn remove_key(
        &self,
        params: Parameters<RemoveKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let workspace = open_workspace(&params.0.project_root_path)?;

        let report = workspace
            .store()
            .remove_key(&params.0.key, &workspace.set)
            .map_err(catalog_error)?;

        json_result(&MoveResult::from(report))
    }

    /// Write explicit values for a key
    #[tool(
        description = "Write translated values for one key, per language code (e.g. {\"en-us\": \"Save\", \"pt-pt\": \"Guardar\"}). Existing values are kept unless overwrite is true. No machine translation is performed."
    )]
    pub async fn set_translations(
        &self,
        params: Parameters<SetTranslationsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        if params.values.is_empty() {
            return Err(McpError::invalid_params("values cannot be empty", None));
        }

        let workspace = open_workspace(&params.project_root_path)?;
        let mut policy = if params.overwrite.unwrap_or(false) {
            ConflictPolicy::Force
        } else {
            ConflictPolicy::Skip
        };

        let report = workspace
            .store()
            .put_translations(&params.key, &params.values, &workspace.set, &mut policy)
            .map_err(catalog_error)?;

        json_result(&SetTranslationsResult::new(&params.key, &report))
    }
}

#[tool_handler]
impl ServerHandler for I18nMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "i18nctl MCP keeps per-language JSON translation catalogs aligned.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_status - Keys missing per language and completeness against the source language\n\
                 3. get_missing_template - Source values of the keys a language lacks\n\
                 4. set_translations - Write values for one key in several languages\n\
                 5. rename_key - Rename a key in every language\n\
                 6. remove_key - Remove a key from every language\n\
                 7. scan_unused - Keys no source file uses (paginated)\n\n\
                 Recommended Workflow:\n\
                 1. Use get_status to see which languages are incomplete\n\
                 2. For each incomplete language, call get_missing_template\n\
                 3. Translate the values and write them with set_translations\n\
                 4. Run get_status again to confirm every catalog is in sync"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = I18nMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
