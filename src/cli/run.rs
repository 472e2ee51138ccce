use anyhow::Result;

use super::{
    args::Command,
    commands::{
        add::add, check::check, import::import, init::init, language::language,
        missing::missing, remove::remove, rename::rename, sort::sort, unused::unused,
    },
    exit_status::ExitStatus,
};

/// Dispatch to the handler of `command`.
pub fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::Init => init(),
        Command::Add(cmd) => add(cmd),
        Command::Rename(cmd) => rename(cmd),
        Command::Remove(cmd) => remove(cmd),
        Command::Language(cmd) => language(cmd),
        Command::Check(cmd) => check(cmd),
        Command::Missing(cmd) => missing(cmd),
        Command::Import(cmd) => import(cmd),
        Command::Unused(cmd) => unused(cmd),
        Command::Sort(cmd) => sort(cmd),
        Command::Serve => {
            // Serve is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
    }
}
