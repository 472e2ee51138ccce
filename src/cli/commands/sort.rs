use anyhow::Result;

use super::super::{args::SortCommand, exit_status::ExitStatus, report::print_success};
use super::helper::open_workspace;

pub fn sort(cmd: SortCommand) -> Result<ExitStatus> {
    let workspace = open_workspace(&cmd.common)?;
    let sorted = workspace.store().sort_all(&workspace.set)?;

    print_success(&format!(
        "Sorted {} {}{}",
        sorted.len(),
        if sorted.len() == 1 { "catalog" } else { "catalogs" },
        if cmd.common.verbose && !sorted.is_empty() {
            format!(" ({})", sorted.join(", "))
        } else {
            String::new()
        }
    ));
    Ok(ExitStatus::Success)
}
