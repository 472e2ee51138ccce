//! Key-set reconciliation across catalogs.
//!
//! Two questions are answered here, and they use different references:
//!
//! - "Are the catalogs consistent with each other?" compares every language
//!   against the union of all keys ([`per_language_diff`]).
//! - "Is each translation complete?" compares every non-source language
//!   against the source language only ([`incomplete_relative_to_source`]).

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::catalog::{Catalog, CatalogError, Leaf, PathTree};

/// Missing and extra keys of one language relative to a reference key set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageDiff {
    pub missing_keys: BTreeSet<String>,
    /// Keys the language has that the reference lacks. Always empty when the
    /// reference is the union of all catalogs.
    pub extra_keys: BTreeSet<String>,
}

/// Completeness of one language measured against the source language.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceGap {
    pub language_code: String,
    pub display_name: String,
    pub missing_keys: BTreeSet<String>,
    /// Keys present in this language but not in the source.
    pub orphan_keys: BTreeSet<String>,
    pub source_key_count: usize,
    pub completeness: f64,
}

impl SourceGap {
    pub fn is_complete(&self) -> bool {
        self.missing_keys.is_empty()
    }
}

fn key_set(catalog: &Catalog) -> BTreeSet<String> {
    catalog.tree.flatten().into_keys().collect()
}

/// Union of flattened keys across every catalog, sorted.
pub fn all_keys(catalogs: &[Catalog]) -> BTreeSet<String> {
    catalogs.iter().flat_map(key_set).collect()
}

/// Diff every language against [`all_keys`], keyed by language code in
/// catalog order.
pub fn per_language_diff(catalogs: &[Catalog]) -> IndexMap<String, LanguageDiff> {
    let all = all_keys(catalogs);
    catalogs
        .iter()
        .map(|catalog| {
            let own = key_set(catalog);
            let diff = LanguageDiff {
                missing_keys: all.difference(&own).cloned().collect(),
                extra_keys: own.difference(&all).cloned().collect(),
            };
            (catalog.language_code.clone(), diff)
        })
        .collect()
}

/// Percentage of `total` keys present, rounded to one decimal place.
///
/// An empty reference counts as fully complete.
pub fn completeness(total: usize, missing: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    let present = total.saturating_sub(missing) as f64;
    round_one_decimal(present / total as f64 * 100.0)
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn find<'a>(catalogs: &'a [Catalog], code: &str) -> Result<&'a Catalog, CatalogError> {
    catalogs
        .iter()
        .find(|c| c.language_code == code)
        .ok_or_else(|| CatalogError::UnknownLanguage(code.to_string()))
}

/// Compare every non-source language against the source language's keys.
pub fn incomplete_relative_to_source(
    catalogs: &[Catalog],
    source_code: &str,
) -> Result<Vec<SourceGap>, CatalogError> {
    let source_keys = key_set(find(catalogs, source_code)?);

    Ok(catalogs
        .iter()
        .filter(|c| c.language_code != source_code)
        .map(|catalog| {
            let own = key_set(catalog);
            let missing_keys: BTreeSet<String> =
                source_keys.difference(&own).cloned().collect();
            SourceGap {
                language_code: catalog.language_code.clone(),
                display_name: catalog.display_name.clone(),
                completeness: completeness(source_keys.len(), missing_keys.len()),
                orphan_keys: own.difference(&source_keys).cloned().collect(),
                source_key_count: source_keys.len(),
                missing_keys,
            }
        })
        .collect())
}

/// Build a ready-to-translate tree of the keys `target` lacks, each holding
/// the source language's value.
pub fn missing_keys_template(
    catalogs: &[Catalog],
    source_code: &str,
    target_code: &str,
) -> Result<PathTree, CatalogError> {
    let source = find(catalogs, source_code)?.tree.flatten();
    let target = find(catalogs, target_code)?;

    let missing: Vec<(String, Leaf)> = source
        .into_iter()
        .filter(|(path, _)| target.tree.get_leaf(path).is_none())
        .collect();

    Ok(PathTree::from_flat(missing))
}
