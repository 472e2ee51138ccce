//! Persistence of catalogs, one JSON file per language.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::{CatalogError, PathTree};

/// Storage collaborator used by [`CatalogStore`](super::CatalogStore).
///
/// `load` returns `Ok(None)` when nothing is stored for the code yet; that is a
/// normal state for a freshly added language. Anything else that goes wrong
/// (permissions, malformed content) is an error.
pub trait CatalogStorage {
    fn load(&self, code: &str) -> Result<Option<PathTree>, CatalogError>;

    fn save(&self, code: &str, tree: &PathTree) -> Result<(), CatalogError>;
}

/// Stores each catalog as `<base_dir>/<code>.json`, pretty-printed with
/// 2-space indentation and a trailing newline.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    base_dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn catalog_path(&self, code: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", code))
    }
}

impl CatalogStorage for JsonFileStorage {
    fn load(&self, code: &str) -> Result<Option<PathTree>, CatalogError> {
        let path = self.catalog_path(code);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CatalogError::Read { path, source }),
        };

        if content.trim().is_empty() {
            return Ok(Some(PathTree::new()));
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| CatalogError::Parse { path, source })
    }

    fn save(&self, code: &str, tree: &PathTree) -> Result<(), CatalogError> {
        let path = self.catalog_path(code);
        fs::create_dir_all(&self.base_dir).map_err(|source| CatalogError::Write {
            path: self.base_dir.clone(),
            source,
        })?;

        let mut content =
            serde_json::to_string_pretty(tree).map_err(|source| CatalogError::Serialize {
                code: code.to_string(),
                source,
            })?;
        content.push('\n');

        // Write next to the target and rename so readers never see a partial file.
        let tmp_path = self.base_dir.join(format!(".{}.json.tmp", code));
        fs::write(&tmp_path, content).map_err(|source| CatalogError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &path).map_err(|source| CatalogError::Write { path, source })
    }
}
