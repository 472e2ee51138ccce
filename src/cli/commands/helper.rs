use std::{env, fs, path::Path};

use anyhow::{Context, Result, bail};

use super::super::args::CommonArgs;
use crate::{
    catalog::{Leaf, PathTree},
    config::TranslatorConfig,
    translate::{DisabledTranslator, RemoteTranslator, Translator},
    workspace::Workspace,
};

/// Open the workspace for the current directory with the command's overrides.
pub fn open_workspace(common: &CommonArgs) -> Result<Workspace> {
    let cwd = env::current_dir().context("Failed to read the current directory")?;
    Workspace::open(&cwd, &common.overrides())
}

/// Build the translator from config. The API key is read from the
/// environment here and nowhere else; without it translation is disabled.
pub fn translator(config: &TranslatorConfig) -> Translator {
    match env::var(&config.api_key_env) {
        Ok(key) if !key.trim().is_empty() => RemoteTranslator::new(
            &config.endpoint,
            &config.model,
            key.trim(),
            std::time::Duration::from_secs(config.timeout_secs),
        )
        .into(),
        _ => DisabledTranslator::new(format!(
            "set {} to enable machine translation",
            config.api_key_env
        ))
        .into(),
    }
}

/// Read a JSON object file (nested or with dotted keys) as a tree.
pub fn read_tree(path: &Path) -> Result<PathTree> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {:?}: expected a JSON object", path))
}

/// Read `key -> source text` pairs from a JSON file.
pub fn read_text_entries(path: &Path) -> Result<Vec<(String, String)>> {
    let mut entries = Vec::new();
    for (key, leaf) in read_tree(path)?.flatten() {
        match leaf {
            Leaf::Text(text) => entries.push((key, text)),
            Leaf::Opaque(value) => {
                bail!("Value of \"{}\" in {:?} is not a string: {}", key, path, value)
            }
        }
    }
    Ok(entries)
}
