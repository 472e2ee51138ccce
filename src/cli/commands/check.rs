use anyhow::Result;

use super::super::{args::CheckCommand, exit_status::ExitStatus, report::print_check};
use super::helper::open_workspace;
use crate::analysis::{incomplete_relative_to_source, per_language_diff};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let workspace = open_workspace(&cmd.common)?;
    let catalogs = workspace.catalogs()?;
    let source_code = &workspace.set.source().code;

    let diff = per_language_diff(&catalogs);
    let gaps = incomplete_relative_to_source(&catalogs, source_code)?;

    print_check(&diff, &gaps, source_code, cmd.common.verbose);

    let drift = diff.values().any(|d| !d.missing_keys.is_empty());
    Ok(ExitStatus::failure_if(drift))
}
