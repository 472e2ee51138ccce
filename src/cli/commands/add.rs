use anyhow::{Result, bail};

use super::super::{
    args::AddCommand,
    exit_status::ExitStatus,
    prompt::{Prompt, is_interactive},
    report::print_key_changes,
};
use super::helper::{open_workspace, read_text_entries, translator};
use crate::catalog::ConflictPolicy;

pub fn add(cmd: AddCommand) -> Result<ExitStatus> {
    let workspace = open_workspace(&cmd.common)?;
    let store = workspace.store();
    let translator = translator(&workspace.config.translator);

    let mut prompt = Prompt::stdio();
    let mut policy = if cmd.force {
        ConflictPolicy::Force
    } else if cmd.no_interactive || !is_interactive() {
        ConflictPolicy::Skip
    } else {
        ConflictPolicy::Interactive(&mut prompt)
    };

    let report = match (&cmd.from_file, &cmd.key, &cmd.text) {
        (Some(file), _, _) => {
            let entries = read_text_entries(file)?;
            if entries.is_empty() {
                bail!("{:?} contains no keys", file);
            }
            store.add_keys(&entries, &workspace.set, &translator, &mut policy)?
        }
        (None, Some(key), Some(text)) => {
            store.add_or_update_key(key, text, &workspace.set, &translator, &mut policy)?
        }
        _ => bail!("Provide <KEY> <TEXT> or --from-file <FILE>"),
    };

    print_key_changes(&report, cmd.common.verbose);
    Ok(ExitStatus::failure_if(report.failed_count() > 0))
}
