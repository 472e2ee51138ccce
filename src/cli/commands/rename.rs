use anyhow::Result;

use super::super::{args::RenameCommand, exit_status::ExitStatus, report::print_move};
use super::helper::open_workspace;

pub fn rename(cmd: RenameCommand) -> Result<ExitStatus> {
    let workspace = open_workspace(&cmd.common)?;
    let report = workspace
        .store()
        .rename_key(&cmd.old, &cmd.new, &workspace.set, cmd.force)?;

    print_move(
        &format!("Renamed {} to {}", cmd.old, cmd.new),
        &report,
        cmd.common.verbose,
    );
    Ok(ExitStatus::Success)
}
