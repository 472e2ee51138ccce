//! Format validation for dotted key paths and language codes.

use std::sync::LazyLock;

use regex::Regex;

use super::CatalogError;

static KEY_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

static LANGUAGE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}-[a-z]{2}$").unwrap());

/// Check that `path` is a usable dotted key path.
///
/// Besides the character class, every segment must be non-empty:
/// `a..b`, `.a` and `a.` cannot address a leaf.
pub fn validate_key_path(path: &str) -> Result<(), CatalogError> {
    if KEY_PATH_REGEX.is_match(path) && path.split('.').all(|segment| !segment.is_empty()) {
        Ok(())
    } else {
        Err(CatalogError::InvalidKeyPath(path.to_string()))
    }
}

/// Check that `code` looks like `en-us`.
pub fn validate_language_code(code: &str) -> Result<(), CatalogError> {
    if LANGUAGE_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(CatalogError::InvalidLanguageCode(code.to_string()))
    }
}
