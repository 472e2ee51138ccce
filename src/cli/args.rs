//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: write a default `.i18nrc.json`
//! - `add`: add or update a key in every language (translating from the source)
//! - `rename` / `remove`: move or delete a key in every language
//! - `language add`: create the catalog for a new language
//! - `check`: report drift between catalogs and translation completeness
//! - `missing` / `import`: export and merge back a language's missing keys
//! - `unused`: find (and optionally delete) keys no source file uses
//! - `sort`: rewrite every catalog with sorted keys
//! - `serve`: start the MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::workspace::WorkspaceOverrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Command> {
        match self.command {
            Some(command) => Some(command),
            None => {
                Self::command().print_help().ok();
                None
            }
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.command
            .as_ref()
            .and_then(Command::common)
            .is_some_and(|common| common.verbose)
    }
}

/// Common arguments shared by all project commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory holding the <code>.json catalogs (overrides config file)
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,

    /// Root directory of the source files to scan (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Source language code (overrides config file)
    #[arg(long)]
    pub source_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> WorkspaceOverrides {
        WorkspaceOverrides {
            locales_dir: self.locales_dir.clone(),
            source_root: self.source_root.clone(),
            source_language: self.source_language.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct AddCommand {
    /// Dotted key path, e.g. button.save
    #[arg(required_unless_present = "from_file")]
    pub key: Option<String>,

    /// Text in the source language
    #[arg(required_unless_present = "from_file")]
    pub text: Option<String>,

    /// Add every key of a JSON file (nested or flat key -> source text)
    #[arg(long, conflicts_with_all = ["key", "text"])]
    pub from_file: Option<PathBuf>,

    /// Overwrite existing values without asking
    #[arg(long)]
    pub force: bool,

    /// Never prompt; keep existing values
    #[arg(long)]
    pub no_interactive: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenameCommand {
    /// Current key path (a leaf or a whole subtree)
    pub old: String,

    /// New key path
    pub new: String,

    /// Replace the new key if it already exists
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Key path to remove from every language
    pub key: String,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LanguageCommand {
    #[command(subcommand)]
    pub action: LanguageAction,
}

#[derive(Debug, Subcommand)]
pub enum LanguageAction {
    /// Create the catalog for a new language and register it in the config
    Add(LanguageAddCommand),
}

#[derive(Debug, Args)]
pub struct LanguageAddCommand {
    /// Language code, e.g. pt-pt
    pub code: String,

    /// Display name sent to the translator, e.g. Portuguese
    pub name: String,

    /// Populate the catalog by translating the source language
    #[arg(long)]
    pub translate: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MissingCommand {
    /// Language to build the template for
    pub code: String,

    /// Write the template to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    /// Language to merge into
    pub code: String,

    /// JSON file with the (translated) keys
    pub file: PathBuf,

    /// Replace values that already exist
    #[arg(long)]
    pub overwrite: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UnusedCommand {
    /// Actually delete unused keys (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SortCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .i18nrc.json configuration file
    Init,
    /// Add or update a key in every language, translating from the source language
    Add(AddCommand),
    /// Rename a key (or subtree) in every language
    Rename(RenameCommand),
    /// Remove a key from every language
    Remove(RemoveCommand),
    /// Manage configured languages
    Language(LanguageCommand),
    /// Report keys missing between catalogs and translation completeness
    Check(CheckCommand),
    /// Print the keys a language is missing, with source values
    Missing(MissingCommand),
    /// Merge a JSON file of translated keys into a language
    Import(ImportCommand),
    /// Find keys that no source file uses
    Unused(UnusedCommand),
    /// Rewrite every catalog with sorted keys
    Sort(SortCommand),
    /// Start MCP server for AI coding agents
    Serve,
}

impl Command {
    pub fn common(&self) -> Option<&CommonArgs> {
        match self {
            Command::Add(cmd) => Some(&cmd.common),
            Command::Rename(cmd) => Some(&cmd.common),
            Command::Remove(cmd) => Some(&cmd.common),
            Command::Language(cmd) => match &cmd.action {
                LanguageAction::Add(add) => Some(&add.common),
            },
            Command::Check(cmd) => Some(&cmd.common),
            Command::Missing(cmd) => Some(&cmd.common),
            Command::Import(cmd) => Some(&cmd.common),
            Command::Unused(cmd) => Some(&cmd.common),
            Command::Sort(cmd) => Some(&cmd.common),
            Command::Init | Command::Serve => None,
        }
    }
}
