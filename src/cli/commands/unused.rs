use anyhow::{Result, bail};

use super::super::{
    args::UnusedCommand,
    exit_status::ExitStatus,
    report::{UnusedSummary, print_unused, print_warning},
};
use super::helper::open_workspace;
use crate::analysis::{all_keys, scan_files, unused_keys, usage_rate};

pub fn unused(cmd: UnusedCommand) -> Result<ExitStatus> {
    let verbose = cmd.common.verbose;
    let workspace = open_workspace(&cmd.common)?;

    let listing = workspace.scannable_files();
    for include in &listing.missing_includes {
        print_warning(&format!("Include path matched nothing: {}", include));
    }
    for pattern in &listing.invalid_patterns {
        print_warning(&format!("Invalid glob pattern: {}", pattern));
    }
    if listing.skipped_count > 0 {
        print_warning(&format!(
            "{} path(s) could not be accessed",
            listing.skipped_count
        ));
    }

    let scan = scan_files(&workspace.source_root, &listing.files);
    if verbose {
        for error in &scan.errors {
            print_warning(&format!("Cannot read {}", error));
        }
    } else if scan.error_count > 0 {
        print_warning(&format!(
            "{} file(s) could not be read (use -v for details)",
            scan.error_count
        ));
    }

    let catalogs = workspace.catalogs()?;
    let reference = all_keys(&catalogs);
    let unused: Vec<String> = unused_keys(&reference, &scan.used_keys)
        .into_iter()
        .collect();
    let rate = usage_rate(&reference, &scan.used_keys);

    if cmd.apply && !unused.is_empty() {
        if scan.scanned_count == 0 {
            bail!(
                "No source files were scanned under {}; refusing to delete keys",
                workspace.source_root.display()
            );
        }
        let removals = workspace.store().remove_leaves(&unused, &workspace.set)?;
        if verbose {
            for removal in &removals {
                println!(
                    "  removed {} {} from {}",
                    removal.removed.len(),
                    if removal.removed.len() == 1 { "key" } else { "keys" },
                    removal.language_code
                );
            }
        }
    }

    print_unused(
        &UnusedSummary {
            unused: &unused,
            scan: &scan,
            usage_rate: rate,
            applied: cmd.apply,
        },
        verbose,
    );

    Ok(ExitStatus::failure_if(!unused.is_empty() && !cmd.apply))
}
