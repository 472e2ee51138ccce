//! Multi-language catalog mutations.
//!
//! Every operation walks the [`CatalogSet`] in its declared order, one
//! language at a time. Format and precondition checks happen before the first
//! write; translation failures only affect the language they happened in.

use std::collections::BTreeMap;

use super::{
    Catalog, CatalogError, CatalogSet, CatalogStorage, ConflictPolicy, Language, Leaf,
    PathTree, validate_key_path, validate_language_code,
};
use crate::translate::Translate;

/// Leaves removed from one language by [`CatalogStore::remove_leaves`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafRemoval {
    pub language_code: String,
    pub removed: Vec<String>,
}

/// What happened to one key in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Added,
    Updated,
    /// An existing value was kept because the conflict policy declined.
    Skipped,
    TranslationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChange {
    pub language_code: String,
    pub path: String,
    pub outcome: KeyOutcome,
}

/// Per-language, per-key outcomes of an add operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChangeReport {
    pub changes: Vec<KeyChange>,
}

impl KeyChangeReport {
    fn push(&mut self, language: &Language, path: &str, outcome: KeyOutcome) {
        self.changes.push(KeyChange {
            language_code: language.code.clone(),
            path: path.to_string(),
            outcome,
        });
    }

    pub fn count(&self, predicate: impl Fn(&KeyOutcome) -> bool) -> usize {
        self.changes.iter().filter(|c| predicate(&c.outcome)).count()
    }

    pub fn written_count(&self) -> usize {
        self.count(|o| matches!(o, KeyOutcome::Added | KeyOutcome::Updated))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, KeyOutcome::Skipped))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, KeyOutcome::TranslationFailed(_)))
    }
}

/// Languages touched by a rename or remove, and those that lacked the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    pub updated: Vec<String>,
    pub skipped: Vec<String>,
}

/// Result of adding a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLanguageReport {
    pub language: Language,
    /// True only when the new catalog was populated from translated source values.
    pub translated: bool,
    pub key_count: usize,
    pub error: Option<String>,
}

/// Loads, mutates and saves catalogs through a storage collaborator.
pub struct CatalogStore<S> {
    storage: S,
}

impl<S: CatalogStorage> CatalogStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load one language's catalog. Nothing stored yet means an empty tree.
    pub fn load(&self, language: &Language) -> Result<Catalog, CatalogError> {
        let tree = self.storage.load(&language.code)?.unwrap_or_default();
        Ok(Catalog::new(language, tree))
    }

    /// Load every catalog of the set, in declared order.
    pub fn load_all(&self, set: &CatalogSet) -> Result<Vec<Catalog>, CatalogError> {
        set.languages().iter().map(|l| self.load(l)).collect()
    }

    /// Persist a tree with every level sorted.
    pub fn save(&self, code: &str, tree: &PathTree) -> Result<(), CatalogError> {
        self.storage.save(code, &tree.sorted())
    }

    /// Add or update `path` in every language.
    ///
    /// The source language stores `source_text` verbatim; every other language
    /// stores its translation. A failed translation skips that language only.
    pub fn add_or_update_key<T: Translate>(
        &self,
        path: &str,
        source_text: &str,
        set: &CatalogSet,
        translator: &T,
        policy: &mut ConflictPolicy<'_>,
    ) -> Result<KeyChangeReport, CatalogError> {
        validate_key_path(path)?;

        let source = set.source();
        let mut report = KeyChangeReport::default();

        for language in set.languages() {
            let mut catalog = self.load(language)?;

            let existed = match catalog.tree.get(path) {
                Some(current) => {
                    if !policy.should_overwrite(language, path, current, source_text) {
                        report.push(language, path, KeyOutcome::Skipped);
                        continue;
                    }
                    true
                }
                None => false,
            };

            let value = if language.code == source.code {
                source_text.to_string()
            } else {
                match translator.translate_one(
                    source_text,
                    &language.display_name,
                    &source.display_name,
                ) {
                    Ok(value) => value,
                    Err(err) => {
                        report.push(language, path, KeyOutcome::TranslationFailed(err.to_string()));
                        continue;
                    }
                }
            };

            catalog.tree.set(path, Leaf::Text(value));
            self.save(&language.code, &catalog.tree)?;
            report.push(language, path, outcome_for(existed));
        }

        Ok(report)
    }

    /// Add or update many keys at once.
    ///
    /// The conflict policy is applied per key. Each non-source language gets a
    /// single batch translation for the accepted keys; if that call fails or
    /// returns the wrong number of values, the language is skipped.
    pub fn add_keys<T: Translate>(
        &self,
        entries: &[(String, String)],
        set: &CatalogSet,
        translator: &T,
        policy: &mut ConflictPolicy<'_>,
    ) -> Result<KeyChangeReport, CatalogError> {
        for (path, _) in entries {
            validate_key_path(path)?;
        }

        let source = set.source();
        let mut report = KeyChangeReport::default();

        for language in set.languages() {
            let mut catalog = self.load(language)?;

            let mut accepted: Vec<(&str, &str, bool)> = Vec::new();
            for (path, text) in entries {
                match catalog.tree.get(path) {
                    Some(current) if !policy.should_overwrite(language, path, current, text) => {
                        report.push(language, path, KeyOutcome::Skipped);
                    }
                    Some(_) => accepted.push((path.as_str(), text.as_str(), true)),
                    None => accepted.push((path.as_str(), text.as_str(), false)),
                }
            }
            if accepted.is_empty() {
                continue;
            }

            let texts: Vec<String> = accepted.iter().map(|(_, text, _)| text.to_string()).collect();
            let values = if language.code == source.code {
                texts
            } else {
                match translate_batch(translator, &texts, language, source) {
                    Ok(values) => values,
                    Err(reason) => {
                        for (path, _, _) in &accepted {
                            report.push(
                                language,
                                path,
                                KeyOutcome::TranslationFailed(reason.clone()),
                            );
                        }
                        continue;
                    }
                }
            };

            for ((path, _, existed), value) in accepted.iter().zip(values) {
                catalog.tree.set(path, Leaf::Text(value));
                report.push(language, path, outcome_for(*existed));
            }
            self.save(&language.code, &catalog.tree)?;
        }

        Ok(report)
    }

    /// Write explicitly provided values for `path`, one per language code.
    ///
    /// Languages without a provided value are left alone. Unknown codes are
    /// rejected before anything is written.
    pub fn put_translations(
        &self,
        path: &str,
        values: &BTreeMap<String, String>,
        set: &CatalogSet,
        policy: &mut ConflictPolicy<'_>,
    ) -> Result<KeyChangeReport, CatalogError> {
        validate_key_path(path)?;
        for code in values.keys() {
            set.require(code)?;
        }

        let mut report = KeyChangeReport::default();
        for language in set.languages() {
            let Some(value) = values.get(&language.code) else {
                continue;
            };
            let mut catalog = self.load(language)?;

            let existed = match catalog.tree.get(path) {
                Some(current) if !policy.should_overwrite(language, path, current, value) => {
                    report.push(language, path, KeyOutcome::Skipped);
                    continue;
                }
                Some(_) => true,
                None => false,
            };

            catalog.tree.set(path, Leaf::Text(value.clone()));
            self.save(&language.code, &catalog.tree)?;
            report.push(language, path, outcome_for(existed));
        }

        Ok(report)
    }

    /// Rename `old_path` to `new_path` in every language that has it.
    ///
    /// All catalogs are checked before anything is written: the old key must
    /// exist somewhere, and the new key must exist nowhere unless `force`.
    /// Whole subtrees can be renamed, e.g. `common` to `shared`.
    pub fn rename_key(
        &self,
        old_path: &str,
        new_path: &str,
        set: &CatalogSet,
        force: bool,
    ) -> Result<MoveReport, CatalogError> {
        validate_key_path(old_path)?;
        validate_key_path(new_path)?;

        let mut catalogs = self.load_all(set)?;
        if !catalogs.iter().any(|c| c.tree.get(old_path).is_some()) {
            return Err(CatalogError::KeyNotFound(old_path.to_string()));
        }
        if !force && catalogs.iter().any(|c| c.tree.get(new_path).is_some()) {
            return Err(CatalogError::KeyExists(new_path.to_string()));
        }

        let mut report = MoveReport::default();
        for catalog in &mut catalogs {
            match catalog.tree.remove(old_path) {
                Some(entry) => {
                    catalog.tree.set_entry(new_path, entry);
                    self.save(&catalog.language_code, &catalog.tree)?;
                    report.updated.push(catalog.language_code.clone());
                }
                None => report.skipped.push(catalog.language_code.clone()),
            }
        }

        Ok(report)
    }

    /// Remove `path` from every language that has it.
    pub fn remove_key(&self, path: &str, set: &CatalogSet) -> Result<MoveReport, CatalogError> {
        validate_key_path(path)?;

        let mut catalogs = self.load_all(set)?;
        if !catalogs.iter().any(|c| c.tree.get(path).is_some()) {
            return Err(CatalogError::KeyNotFound(path.to_string()));
        }

        let mut report = MoveReport::default();
        for catalog in &mut catalogs {
            if catalog.tree.remove(path).is_some() {
                self.save(&catalog.language_code, &catalog.tree)?;
                report.updated.push(catalog.language_code.clone());
            } else {
                report.skipped.push(catalog.language_code.clone());
            }
        }

        Ok(report)
    }

    /// Remove each of `paths` from every language where it resolves to a leaf.
    ///
    /// A path that holds a subtree in some language is left alone there.
    /// Each catalog is loaded and saved at most once. Returns, per language in
    /// set order, the paths that were removed; languages without changes are
    /// omitted.
    pub fn remove_leaves(
        &self,
        paths: &[String],
        set: &CatalogSet,
    ) -> Result<Vec<LeafRemoval>, CatalogError> {
        for path in paths {
            validate_key_path(path)?;
        }

        let mut removals = Vec::new();
        for language in set.languages() {
            let mut catalog = self.load(language)?;
            let mut removed = Vec::new();
            for path in paths {
                if catalog.tree.get_leaf(path).is_some() {
                    catalog.tree.remove(path);
                    removed.push(path.clone());
                }
            }
            if removed.is_empty() {
                continue;
            }
            self.save(&language.code, &catalog.tree)?;
            removals.push(LeafRemoval {
                language_code: language.code.clone(),
                removed,
            });
        }

        Ok(removals)
    }

    /// Create the catalog for a new language.
    ///
    /// A catalog file is always written, even when translation fails: on
    /// failure it is empty and the report carries the error.
    pub fn add_language<T: Translate>(
        &self,
        code: &str,
        display_name: &str,
        set: &CatalogSet,
        translate_from_source: bool,
        translator: &T,
    ) -> Result<AddLanguageReport, CatalogError> {
        validate_language_code(code)?;
        if set.contains(code) {
            return Err(CatalogError::LanguageExists(code.to_string()));
        }

        let language = Language::new(code, display_name);
        let empty = |error: Option<String>| -> Result<AddLanguageReport, CatalogError> {
            self.save(code, &PathTree::new())?;
            Ok(AddLanguageReport {
                language: language.clone(),
                translated: false,
                key_count: 0,
                error,
            })
        };

        if !translate_from_source {
            return empty(None);
        }

        let source = set.source();
        let flat = self.load(source)?.tree.flatten();
        if flat.is_empty() {
            return empty(None);
        }

        // Only text leaves are translated; opaque leaves are copied verbatim.
        let (text_paths, texts): (Vec<&String>, Vec<String>) = flat
            .iter()
            .filter_map(|(path, leaf)| leaf.as_text().map(|text| (path, text.to_string())))
            .unzip();

        let translated = if texts.is_empty() {
            Vec::new()
        } else {
            match translate_batch(translator, &texts, &language, source) {
                Ok(values) => values,
                Err(reason) => return empty(Some(reason)),
            }
        };

        let mut tree = PathTree::new();
        for (path, leaf) in &flat {
            if leaf.as_text().is_none() {
                tree.set(path, leaf.clone());
            }
        }
        for (path, value) in text_paths.into_iter().zip(translated) {
            tree.set(path, Leaf::Text(value));
        }

        self.save(code, &tree)?;
        Ok(AddLanguageReport {
            language,
            translated: true,
            key_count: flat.len(),
            error: None,
        })
    }

    /// Merge a tree (usually a translated missing-keys template) into one
    /// language's catalog. Returns the paths written.
    pub fn import(
        &self,
        code: &str,
        incoming: &PathTree,
        set: &CatalogSet,
        overwrite: bool,
    ) -> Result<Vec<String>, CatalogError> {
        let language = set.require(code)?;
        for path in incoming.keys() {
            validate_key_path(&path)?;
        }

        let mut catalog = self.load(language)?;
        let merged = catalog.tree.merge(incoming, overwrite);
        if !merged.is_empty() {
            self.save(code, &catalog.tree)?;
        }
        Ok(merged)
    }

    /// Re-save every stored catalog sorted. Languages without a stored
    /// catalog are not created. Returns the codes that were rewritten.
    pub fn sort_all(&self, set: &CatalogSet) -> Result<Vec<String>, CatalogError> {
        let mut sorted = Vec::new();
        for language in set.languages() {
            if let Some(tree) = self.storage.load(&language.code)? {
                self.save(&language.code, &tree)?;
                sorted.push(language.code.clone());
            }
        }
        Ok(sorted)
    }
}

fn outcome_for(existed: bool) -> KeyOutcome {
    if existed {
        KeyOutcome::Updated
    } else {
        KeyOutcome::Added
    }
}

/// Batch-translate and verify the result length.
fn translate_batch<T: Translate>(
    translator: &T,
    texts: &[String],
    target: &Language,
    source: &Language,
) -> Result<Vec<String>, String> {
    let values = translator
        .translate_many(texts, &target.display_name, &source.display_name)
        .map_err(|err| err.to_string())?;
    if values.len() != texts.len() {
        return Err(format!(
            "expected {} translations, got {}",
            texts.len(),
            values.len()
        ));
    }
    Ok(values)
}
