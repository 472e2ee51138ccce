use anyhow::Result;

use super::super::{args::ImportCommand, exit_status::ExitStatus, report::print_success};
use super::helper::{open_workspace, read_tree};

pub fn import(cmd: ImportCommand) -> Result<ExitStatus> {
    let workspace = open_workspace(&cmd.common)?;
    let incoming = read_tree(&cmd.file)?;

    let merged = workspace
        .store()
        .import(&cmd.code, &incoming, &workspace.set, cmd.overwrite)?;

    if cmd.common.verbose {
        for path in &merged {
            println!("  {}", path);
        }
    }
    print_success(&format!(
        "Imported {} {} into {}",
        merged.len(),
        if merged.len() == 1 { "key" } else { "keys" },
        cmd.code
    ));
    Ok(ExitStatus::Success)
}
