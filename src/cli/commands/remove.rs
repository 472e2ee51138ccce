use anyhow::Result;

use super::super::{
    args::RemoveCommand,
    exit_status::ExitStatus,
    prompt::{Prompt, is_interactive},
    report::print_move,
};
use super::helper::open_workspace;

pub fn remove(cmd: RemoveCommand) -> Result<ExitStatus> {
    let workspace = open_workspace(&cmd.common)?;

    if !cmd.yes
        && is_interactive()
        && !Prompt::stdio().confirm(&format!("Remove {} from every language?", cmd.key))
    {
        eprintln!("Aborted");
        return Ok(ExitStatus::Success);
    }

    let report = workspace.store().remove_key(&cmd.key, &workspace.set)?;

    print_move(
        &format!("Removed {}", cmd.key),
        &report,
        cmd.common.verbose,
    );
    Ok(ExitStatus::Success)
}
