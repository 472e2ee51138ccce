use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogError, CatalogSet, Language};

pub const CONFIG_FILE_NAME: &str = ".i18nrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Language code to display name, in declaration order.
    #[serde(default = "default_languages")]
    pub languages: IndexMap<String, String>,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub include_dirs: Vec<String>,
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
    #[serde(default)]
    pub translator: TranslatorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_languages() -> IndexMap<String, String> {
    IndexMap::from([("en-us".to_string(), "English".to_string())])
}

fn default_source_language() -> String {
    "en-us".to_string()
}

fn default_locales_dir() -> String {
    "./locales".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_extensions() -> Vec<String> {
    ["js", "jsx", "ts", "tsx", "vue", "svelte"]
        .map(String::from)
        .to_vec()
}

fn default_exclude_dirs() -> Vec<String> {
    ["node_modules", "dist", "build", ".git"]
        .map(String::from)
        .to_vec()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            source_language: default_source_language(),
            locales_dir: default_locales_dir(),
            source_root: default_source_root(),
            extensions: default_extensions(),
            include_dirs: Vec::new(),
            exclude_dirs: default_exclude_dirs(),
            translator: TranslatorConfig::default(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a language code is malformed, the source language
    /// is not configured, or a glob pattern in `includeDirs`/`excludeDirs`
    /// is invalid.
    pub fn validate(&self) -> Result<()> {
        self.catalog_set()
            .context("Invalid 'languages' or 'sourceLanguage'")?;

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        // Entries without wildcards are literal paths, so [locale] stays valid.
        for (field, patterns) in [
            ("includeDirs", &self.include_dirs),
            ("excludeDirs", &self.exclude_dirs),
        ] {
            for pattern in patterns {
                if pattern.contains('*') || pattern.contains('?') {
                    Pattern::new(pattern).with_context(|| {
                        format!("Invalid glob pattern in '{}': \"{}\"", field, pattern)
                    })?;
                }
            }
        }

        Ok(())
    }

    /// The configured languages as a catalog set.
    pub fn catalog_set(&self) -> Result<CatalogSet, CatalogError> {
        CatalogSet::new(
            self.languages
                .iter()
                .map(|(code, name)| (code.as_str(), name.as_str())),
            &self.source_language,
        )
    }

    /// Append a language to `languages`. Existing codes are left untouched.
    pub fn add_language(&mut self, language: &Language) -> bool {
        if self.languages.contains_key(&language.code) {
            return false;
        }
        self.languages
            .insert(language.code.clone(), language.display_name.clone());
        true
    }
}

pub fn default_config_json() -> Result<String> {
    config_json(&Config::default())
}

fn config_json(config: &Config) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(config).context("Failed to serialize config.")?;
    json.push('\n');
    Ok(json)
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub path: Option<PathBuf>,
    /// Directory relative paths in the config resolve against: the config
    /// file's directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    /// True if config was loaded from a file, false if using defaults.
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}

/// Write `config` as pretty JSON to `path`.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    fs::write(path, config_json(config)?)
        .with_context(|| format!("Failed to write config file: {:?}", path))
}
