//! Static, regex-based detection of translation-key usage in source files.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt, fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

use super::reconcile::round_one_decimal;

/// Matches `t('key')`, `$t("key")` and `i18n.t(`key`)`.
///
/// A bare `t(` must not follow a member access, while `i18n.t(` may sit
/// behind one (`this.$i18n.t(...)`, `app.i18n.t(...)`).
///
/// Groups 1-3 hold the key for each quote style; group 4 is set when the
/// literal is followed by `+` (concatenation).
static USAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)(?:(?:^|[^\w$.])t|(?:^|[^\w$])\$t|(?:^|[^\w$])(?:[\w$]+\.)*\$?i18n\.t)\(\s*(?:'([^']*)'|"([^"]*)"|`([^`]*)`)(\s*\+)?"#,
    )
    .unwrap()
});

/// One key literal found in a text, with its 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyUsage {
    pub key: String,
    pub line: usize,
}

/// Where a key is used: a path relative to the scan root plus a 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageLocation {
    pub file: String,
    pub line: usize,
}

impl fmt::Display for UsageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub used_keys: BTreeSet<String>,
    /// Per key, the first usage in every file, in scan order.
    pub locations: BTreeMap<String, Vec<UsageLocation>>,
    pub scanned_count: usize,
    pub error_count: usize,
    pub errors: Vec<String>,
}

/// Keys built at runtime cannot be matched against a catalog.
pub fn is_dynamic_key(key: &str) -> bool {
    key.contains("${") || key.contains("{{") || key.contains('+')
}

/// Every static key usage in `text`, in order of appearance.
pub fn extract_key_usages(text: &str) -> Vec<KeyUsage> {
    let mut usages = Vec::new();
    let mut line = 1;
    let mut cursor = 0;

    for caps in USAGE_RE.captures_iter(text) {
        let Some(key) = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)) else {
            continue;
        };
        if caps.get(4).is_some() || is_dynamic_key(key.as_str()) {
            continue;
        }
        line += text[cursor..key.start()].matches('\n').count();
        cursor = key.start();
        usages.push(KeyUsage {
            key: key.as_str().to_string(),
            line,
        });
    }

    usages
}

/// The deduplicated set of static keys used in `text`.
pub fn extract_keys_from_text(text: &str) -> BTreeSet<String> {
    extract_key_usages(text).into_iter().map(|u| u.key).collect()
}

/// Scan `files` sequentially. Unreadable files are counted, not fatal.
pub fn scan_files(root: &Path, files: &[PathBuf]) -> ScanReport {
    let mut report = ScanReport::default();

    for file in files {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                report.error_count += 1;
                report.errors.push(format!("{}: {}", file.display(), e));
                continue;
            }
        };
        report.scanned_count += 1;

        let relative = file
            .strip_prefix(root)
            .unwrap_or(file)
            .to_string_lossy()
            .replace('\\', "/");

        let mut seen_in_file = BTreeSet::new();
        for usage in extract_key_usages(&content) {
            report.used_keys.insert(usage.key.clone());
            if seen_in_file.insert(usage.key.clone()) {
                report
                    .locations
                    .entry(usage.key)
                    .or_default()
                    .push(UsageLocation {
                        file: relative.clone(),
                        line: usage.line,
                    });
            }
        }
    }

    report
}

/// Reference keys that no scanned file uses.
pub fn unused_keys(reference: &BTreeSet<String>, used: &BTreeSet<String>) -> BTreeSet<String> {
    reference.difference(used).cloned().collect()
}

/// Share of reference keys that are used, as a percentage with one decimal.
pub fn usage_rate(reference: &BTreeSet<String>, used: &BTreeSet<String>) -> f64 {
    if reference.is_empty() {
        return 100.0;
    }
    let hits = reference.intersection(used).count() as f64;
    round_one_decimal(hits / reference.len() as f64 * 100.0)
}
