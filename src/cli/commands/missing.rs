use std::fs;

use anyhow::{Context, Result};

use super::super::{args::MissingCommand, exit_status::ExitStatus, report::print_success};
use super::helper::open_workspace;
use crate::analysis::missing_keys_template;

pub fn missing(cmd: MissingCommand) -> Result<ExitStatus> {
    let workspace = open_workspace(&cmd.common)?;
    workspace.set.require(&cmd.code)?;
    let catalogs = workspace.catalogs()?;

    let template = missing_keys_template(&catalogs, &workspace.set.source().code, &cmd.code)?;
    let mut json =
        serde_json::to_string_pretty(&template).context("Failed to serialize template")?;
    json.push('\n');

    match &cmd.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
            let count = template.keys().len();
            print_success(&format!(
                "Wrote {} missing {} for {} to {}",
                count,
                if count == 1 { "key" } else { "keys" },
                cmd.code,
                path.display()
            ));
        }
        None => print!("{}", json),
    }

    Ok(ExitStatus::Success)
}
