//! A project opened from its configuration: resolved directories, the
//! language set and a catalog store over the locales directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{
    analysis::{FileListing, list_scannable_files},
    catalog::{Catalog, CatalogSet, CatalogStore, JsonFileStorage},
    config::{Config, load_config},
};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceOverrides {
    pub locales_dir: Option<PathBuf>,
    pub source_root: Option<PathBuf>,
    pub source_language: Option<String>,
}

#[derive(Debug)]
pub struct Workspace {
    pub config: Config,
    /// Config file the workspace was opened from, if any.
    pub config_path: Option<PathBuf>,
    pub locales_dir: PathBuf,
    pub source_root: PathBuf,
    pub set: CatalogSet,
}

impl Workspace {
    /// Load configuration by walking up from `start_dir` and apply overrides.
    ///
    /// Paths from the config file resolve against the file's directory;
    /// override paths resolve against `start_dir`.
    pub fn open(start_dir: &Path, overrides: &WorkspaceOverrides) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        let mut config = loaded.config;

        if let Some(code) = &overrides.source_language {
            config.source_language = code.clone();
        }
        let set = config
            .catalog_set()
            .with_context(|| format!("Invalid source language '{}'", config.source_language))?;

        let locales_dir = match &overrides.locales_dir {
            Some(dir) => start_dir.join(dir),
            None => loaded.base_dir.join(&config.locales_dir),
        };
        let source_root = match &overrides.source_root {
            Some(dir) => start_dir.join(dir),
            None => loaded.base_dir.join(&config.source_root),
        };

        Ok(Self {
            config,
            config_path: loaded.path,
            locales_dir,
            source_root,
            set,
        })
    }

    pub fn store(&self) -> CatalogStore<JsonFileStorage> {
        CatalogStore::new(JsonFileStorage::new(&self.locales_dir))
    }

    /// Load every configured catalog, in configuration order.
    pub fn catalogs(&self) -> Result<Vec<Catalog>> {
        self.store()
            .load_all(&self.set)
            .context("Failed to load translation catalogs")
    }

    /// Resolve the source files a usage scan should read.
    pub fn scannable_files(&self) -> FileListing {
        list_scannable_files(
            &self.source_root,
            &self.config.extensions,
            &self.config.include_dirs,
            &self.config.exclude_dirs,
        )
    }
}
