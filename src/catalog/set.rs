use super::{CatalogError, PathTree, validate_language_code};

/// A configured language: its code and the human label sent to translators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub display_name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }
}

/// The configured languages, in declaration order, plus the source language.
#[derive(Debug, Clone)]
pub struct CatalogSet {
    languages: Vec<Language>,
    source_index: usize,
}

impl CatalogSet {
    /// Build a set from `(code, display name)` pairs.
    ///
    /// Fails if a code is malformed, appears twice, or if `source_code` is not
    /// one of the configured codes.
    pub fn new<I, C, N>(languages: I, source_code: &str) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let mut result: Vec<Language> = Vec::new();
        for (code, name) in languages {
            let language = Language::new(code, name);
            validate_language_code(&language.code)?;
            if result.iter().any(|l| l.code == language.code) {
                return Err(CatalogError::LanguageExists(language.code));
            }
            result.push(language);
        }

        let source_index = result
            .iter()
            .position(|l| l.code == source_code)
            .ok_or_else(|| CatalogError::UnknownLanguage(source_code.to_string()))?;

        Ok(Self {
            languages: result,
            source_index,
        })
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn source(&self) -> &Language {
        &self.languages[self.source_index]
    }

    pub fn get(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn require(&self, code: &str) -> Result<&Language, CatalogError> {
        self.get(code)
            .ok_or_else(|| CatalogError::UnknownLanguage(code.to_string()))
    }

    /// Copy of this set with `language` appended.
    pub fn with_language(&self, language: Language) -> Self {
        let mut languages = self.languages.clone();
        languages.push(language);
        Self {
            languages,
            source_index: self.source_index,
        }
    }
}

/// One language's catalog as loaded from storage.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub language_code: String,
    pub display_name: String,
    pub tree: PathTree,
}

impl Catalog {
    pub fn empty(language: &Language) -> Self {
        Self::new(language, PathTree::new())
    }

    pub fn new(language: &Language, tree: PathTree) -> Self {
        Self {
            language_code: language.code.clone(),
            display_name: language.display_name.clone(),
            tree,
        }
    }
}
