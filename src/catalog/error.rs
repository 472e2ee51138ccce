use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by catalog operations.
///
/// Every variant except the storage ones is raised before any catalog is
/// written, so a failed operation leaves all catalogs untouched.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid key path \"{0}\" (allowed: letters, digits, '_', '-', separated by '.')")]
    InvalidKeyPath(String),

    #[error("invalid language code \"{0}\" (expected a code like \"en-us\")")]
    InvalidLanguageCode(String),

    #[error("key \"{0}\" was not found in any catalog")]
    KeyNotFound(String),

    #[error("key \"{0}\" already exists (use --force to overwrite)")]
    KeyExists(String),

    #[error("language \"{0}\" is already configured")]
    LanguageExists(String),

    #[error("language \"{0}\" is not configured")]
    UnknownLanguage(String),

    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write catalog {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize catalog \"{code}\": {source}")]
    Serialize {
        code: String,
        #[source]
        source: serde_json::Error,
    },
}
