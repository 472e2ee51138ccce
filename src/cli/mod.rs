//! Command-line interface layer.
//!
//! - `args`: clap definitions
//! - `commands`: one module per subcommand, each returning an [`ExitStatus`]
//! - `report`: colored, cargo-style output
//! - `prompt`: terminal confirmations

use std::process::ExitCode;

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod prompt;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;

/// Run a parsed command line. `serve` is handled by the binary before this.
pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(command) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = run::run(command)?;
    Ok(status.into())
}
