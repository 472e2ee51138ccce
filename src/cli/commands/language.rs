use std::env;

use anyhow::{Context, Result};

use super::super::{
    args::{LanguageAction, LanguageAddCommand, LanguageCommand},
    exit_status::ExitStatus,
    report::print_language_added,
};
use super::helper::{open_workspace, translator};
use crate::config::{CONFIG_FILE_NAME, load_config, save_config};

pub fn language(cmd: LanguageCommand) -> Result<ExitStatus> {
    match cmd.action {
        LanguageAction::Add(add) => add_language(add),
    }
}

fn add_language(cmd: LanguageAddCommand) -> Result<ExitStatus> {
    let workspace = open_workspace(&cmd.common)?;
    let translator = translator(&workspace.config.translator);

    let report = workspace.store().add_language(
        &cmd.code,
        &cmd.name,
        &workspace.set,
        cmd.translate,
        &translator,
    )?;

    // Reload so command-line overrides are not written back to the file.
    let cwd = env::current_dir().context("Failed to read the current directory")?;
    let mut config = load_config(&cwd)?.config;
    config.add_language(&report.language);
    let config_path = workspace
        .config_path
        .clone()
        .unwrap_or_else(|| cwd.join(CONFIG_FILE_NAME));
    save_config(&config_path, &config)?;

    print_language_added(&report);
    Ok(ExitStatus::failure_if(report.error.is_some()))
}
