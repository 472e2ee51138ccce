use std::process::ExitCode;

use clap::Parser;
use i18nctl::cli::{Arguments, Command, ExitStatus};

/// `Error: ` followed by the whole context chain.
fn error_message(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

fn main() -> ExitCode {
    let args = Arguments::parse();

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = i18nctl::mcp::run_server() {
            eprintln!("{}", error_message(&err));
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match i18nctl::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitStatus::Error.into()
        }
    }
}
