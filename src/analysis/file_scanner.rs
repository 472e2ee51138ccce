use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::{DirEntry, WalkDir};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory names or paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Files selected for a usage scan.
#[derive(Debug, Default)]
pub struct FileListing {
    /// Sorted, deduplicated file paths (rooted at the scan root).
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed while walking.
    pub skipped_count: usize,
    /// Include entries that matched nothing.
    pub missing_includes: Vec<String>,
    /// Exclude patterns that failed to parse.
    pub invalid_patterns: Vec<String>,
}

struct Excludes {
    names: Vec<String>,
    paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl Excludes {
    fn new(root: &Path, exclude_dirs: &[String], invalid: &mut Vec<String>) -> Self {
        let mut names = Vec::new();
        let mut paths = Vec::new();
        let mut patterns = Vec::new();

        for exclude in exclude_dirs {
            if is_glob_pattern(exclude) {
                match Pattern::new(exclude) {
                    Ok(pattern) => patterns.push(pattern),
                    Err(_) => invalid.push(exclude.clone()),
                }
            } else if exclude.contains('/') {
                paths.push(root.join(exclude.trim_start_matches("./")));
            } else {
                names.push(exclude.clone());
            }
        }

        Self {
            names,
            paths,
            patterns,
        }
    }

    fn matches(&self, root: &Path, entry: &DirEntry) -> bool {
        let path = entry.path();
        if entry.file_type().is_dir() && entry.depth() > 0 {
            let name = entry.file_name().to_string_lossy();
            if self.names.iter().any(|n| *n == name) {
                return true;
            }
        }
        if self.paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        let relative = relative.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&relative))
    }
}

/// List the files under `root` whose extension is one of `extensions`.
///
/// `include_dirs` restricts the walk to those sub-directories (literal paths
/// or glob patterns, relative to `root`); an empty list walks all of `root`.
/// `exclude_dirs` entries are directory names (`node_modules`), relative
/// paths (`src/generated`) or glob patterns matched against the path relative
/// to `root` (`**/*.stories.tsx`).
pub fn list_scannable_files(
    root: &Path,
    extensions: &[String],
    include_dirs: &[String],
    exclude_dirs: &[String],
) -> FileListing {
    let mut listing = FileListing::default();
    let excludes = Excludes::new(root, exclude_dirs, &mut listing.invalid_patterns);

    let dirs_to_scan: Vec<PathBuf> = if include_dirs.is_empty() {
        vec![root.to_path_buf()]
    } else {
        let mut dirs = Vec::new();
        for include in include_dirs {
            if is_glob_pattern(include) {
                let full_pattern = root.join(include);
                let matched: Vec<PathBuf> = match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => entries.flatten().filter(|p| p.is_dir()).collect(),
                    Err(_) => {
                        listing.invalid_patterns.push(include.clone());
                        continue;
                    }
                };
                if matched.is_empty() {
                    listing.missing_includes.push(include.clone());
                }
                dirs.extend(matched);
            } else {
                let path = root.join(include);
                if path.exists() {
                    dirs.push(path);
                } else {
                    listing.missing_includes.push(include.clone());
                }
            }
        }
        dirs
    };

    let mut files = BTreeSet::new();
    for dir in dirs_to_scan {
        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !excludes.matches(root, entry));
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => {
                    listing.skipped_count += 1;
                    continue;
                }
            };
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                files.insert(entry.into_path());
            }
        }
    }

    listing.files = files.into_iter().collect();
    listing
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
