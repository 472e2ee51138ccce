//! Report formatting and printing utilities.
//!
//! Engines return plain result structs; everything the user sees is printed
//! from here, in a cargo-like style. Every printer has a `_to` variant that
//! takes a writer, so output can be tested.

use std::io::{self, Write};

use colored::Colorize;
use indexmap::IndexMap;
use unicode_width::UnicodeWidthStr;

use crate::analysis::{LanguageDiff, ScanReport, SourceGap};
use crate::catalog::{AddLanguageReport, KeyChangeReport, KeyOutcome, MoveReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of usage locations shown per key in verbose mode.
const MAX_LOCATIONS_DISPLAY: usize = 3;

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Pad `text` to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

pub fn print_success(message: &str) {
    print_success_to(message, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

pub fn print_warning(message: &str) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}",
        "warning:".bold().yellow(),
        message
    );
}

// ============================================================
// add / set
// ============================================================

pub fn print_key_changes(report: &KeyChangeReport, verbose: bool) {
    print_key_changes_to(report, verbose, &mut io::stdout().lock());
}

pub fn print_key_changes_to<W: Write>(report: &KeyChangeReport, verbose: bool, writer: &mut W) {
    let code_width = report
        .changes
        .iter()
        .map(|c| UnicodeWidthStr::width(c.language_code.as_str()))
        .max()
        .unwrap_or(0);

    for change in &report.changes {
        let code = pad(&change.language_code, code_width);
        match &change.outcome {
            KeyOutcome::Added | KeyOutcome::Updated => {
                let verb = if change.outcome == KeyOutcome::Added {
                    "added"
                } else {
                    "updated"
                };
                let _ = writeln!(
                    writer,
                    "{} {}  {} {}",
                    SUCCESS_MARK.green(),
                    code,
                    change.path,
                    verb.dimmed()
                );
            }
            KeyOutcome::Skipped => {
                if verbose {
                    let _ = writeln!(
                        writer,
                        "- {}  {} {}",
                        code,
                        change.path,
                        "kept existing value".dimmed()
                    );
                }
            }
            KeyOutcome::TranslationFailed(reason) => {
                let _ = writeln!(
                    writer,
                    "{} {}  {} {}",
                    FAILURE_MARK.red(),
                    code,
                    change.path,
                    format!("translation failed: {}", reason).red()
                );
            }
        }
    }

    let written = report.written_count();
    let skipped = report.skipped_count();
    let failed = report.failed_count();
    let summary = format!(
        "{} {} written, {} skipped, {} failed",
        written,
        plural(written, "value", "values"),
        skipped,
        failed
    );
    if failed > 0 {
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), summary.red());
    } else {
        print_success_to(&summary, writer);
    }
}

// ============================================================
// rename / remove
// ============================================================

pub fn print_move(action: &str, report: &MoveReport, verbose: bool) {
    print_move_to(action, report, verbose, &mut io::stdout().lock());
}

pub fn print_move_to<W: Write>(action: &str, report: &MoveReport, verbose: bool, writer: &mut W) {
    let count = report.updated.len();
    print_success_to(
        &format!(
            "{} in {} {} ({})",
            action,
            count,
            plural(count, "language", "languages"),
            report.updated.join(", ")
        ),
        writer,
    );
    if verbose && !report.skipped.is_empty() {
        let _ = writeln!(
            writer,
            "  {} not present in: {}",
            "note:".bold(),
            report.skipped.join(", ")
        );
    }
}

// ============================================================
// language add
// ============================================================

pub fn print_language_added(report: &AddLanguageReport) {
    print_language_added_to(report, &mut io::stdout().lock());
}

pub fn print_language_added_to<W: Write>(report: &AddLanguageReport, writer: &mut W) {
    let language = &report.language;
    match &report.error {
        Some(error) => {
            let _ = writeln!(
                writer,
                "{} {}",
                FAILURE_MARK.red(),
                format!(
                    "Created empty catalog for {} ({}); translation failed: {}",
                    language.display_name, language.code, error
                )
                .red()
            );
        }
        None if report.translated => print_success_to(
            &format!(
                "Created catalog for {} ({}) with {} translated {}",
                language.display_name,
                language.code,
                report.key_count,
                plural(report.key_count, "key", "keys")
            ),
            writer,
        ),
        None => print_success_to(
            &format!(
                "Created empty catalog for {} ({})",
                language.display_name, language.code
            ),
            writer,
        ),
    }
}

// ============================================================
// check
// ============================================================

pub fn print_check(
    diff: &IndexMap<String, LanguageDiff>,
    gaps: &[SourceGap],
    source_code: &str,
    verbose: bool,
) {
    print_check_to(diff, gaps, source_code, verbose, &mut io::stdout().lock());
}

pub fn print_check_to<W: Write>(
    diff: &IndexMap<String, LanguageDiff>,
    gaps: &[SourceGap],
    source_code: &str,
    verbose: bool,
    writer: &mut W,
) {
    for (code, language_diff) in diff {
        let missing = &language_diff.missing_keys;
        if missing.is_empty() {
            continue;
        }
        let _ = writeln!(
            writer,
            "{}: {} {} missing in {}",
            "error".bold().red(),
            missing.len(),
            plural(missing.len(), "key", "keys"),
            code.bold()
        );
        for key in missing {
            let _ = writeln!(writer, "  {} {}", "-".blue(), key);
        }
    }

    if !gaps.is_empty() {
        let name_width = gaps
            .iter()
            .map(|g| UnicodeWidthStr::width(g.display_name.as_str()))
            .max()
            .unwrap_or(0);
        let _ = writeln!(writer, "Completeness against {}:", source_code.bold());
        for gap in gaps {
            let percent = format!("{:>5.1}%", gap.completeness);
            let percent = if gap.is_complete() {
                percent.green()
            } else {
                percent.yellow()
            };
            let _ = writeln!(
                writer,
                "  {}  {}  {}  ({}/{})",
                pad(&gap.display_name, name_width),
                gap.language_code,
                percent,
                gap.source_key_count - gap.missing_keys.len(),
                gap.source_key_count
            );
            if verbose && !gap.orphan_keys.is_empty() {
                let orphans: Vec<&str> = gap.orphan_keys.iter().map(String::as_str).collect();
                let _ = writeln!(
                    writer,
                    "    {} not in {}: {}",
                    "note:".bold(),
                    source_code,
                    orphans.join(", ")
                );
            }
        }
    }

    let drift: usize = diff.values().map(|d| d.missing_keys.len()).sum();
    if drift == 0 {
        print_success_to(
            &format!(
                "Checked {} {} - all catalogs have the same keys",
                diff.len(),
                plural(diff.len(), "catalog", "catalogs")
            ),
            writer,
        );
    } else {
        let languages = diff.values().filter(|d| !d.missing_keys.is_empty()).count();
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} missing {} across {} {}",
                drift,
                plural(drift, "key", "keys"),
                languages,
                plural(languages, "language", "languages")
            )
            .red()
        );
    }
}

// ============================================================
// unused
// ============================================================

/// Summary of an unused-key scan, ready to print.
pub struct UnusedSummary<'a> {
    pub unused: &'a [String],
    pub scan: &'a ScanReport,
    pub usage_rate: f64,
    pub applied: bool,
}

pub fn print_unused(summary: &UnusedSummary<'_>, verbose: bool) {
    print_unused_to(summary, verbose, &mut io::stdout().lock());
}

pub fn print_unused_to<W: Write>(summary: &UnusedSummary<'_>, verbose: bool, writer: &mut W) {
    let scan = summary.scan;

    if verbose {
        for (key, locations) in &scan.locations {
            let shown: Vec<String> = locations
                .iter()
                .take(MAX_LOCATIONS_DISPLAY)
                .map(|l| l.to_string())
                .collect();
            let more = locations.len().saturating_sub(MAX_LOCATIONS_DISPLAY);
            let suffix = if more > 0 {
                format!(" (+{} more)", more)
            } else {
                String::new()
            };
            let _ = writeln!(
                writer,
                "  {} {}  {}{}",
                "used".dimmed(),
                key,
                shown.join(", ").dimmed(),
                suffix.dimmed()
            );
        }
    }

    let label = if summary.applied {
        "removed".green()
    } else {
        "warning".bold().yellow()
    };
    for key in summary.unused {
        let _ = writeln!(writer, "{}: unused key \"{}\"", label, key);
    }

    let _ = writeln!(
        writer,
        "Scanned {} {}; {} of keys are used",
        scan.scanned_count,
        plural(scan.scanned_count, "file", "files"),
        format!("{:.1}%", summary.usage_rate).bold()
    );

    let count = summary.unused.len();
    if count == 0 {
        print_success_to("No unused keys", writer);
    } else if summary.applied {
        print_success_to(
            &format!("Removed {} unused {}", count, plural(count, "key", "keys")),
            writer,
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} unused {} (run with {} to delete)",
            FAILURE_MARK.red(),
            count,
            plural(count, "key", "keys"),
            "--apply".cyan()
        );
    }
}
