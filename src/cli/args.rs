//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `add`: Fill in missing translations interactively
//! - `guess`: Fill in missing translations with the configured guess command
//! - `sort`: Sort every translation document by key
//! - `metrics`: Show completion per language, optionally exporting missing keys
//! - `init`: Initialize a `.transcat.yml` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Scope;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Add(cmd)) => Some(&cmd.common),
            Some(Command::Guess(cmd)) => Some(&cmd.common),
            Some(Command::Sort(cmd)) => Some(&cmd.common),
            Some(Command::Metrics(cmd)) => Some(&cmd.common),
            Some(Command::Init) | None => None,
        }
    }
}

/// Common arguments shared by all project commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory to start looking for .transcat.yml (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Only work on these domains. Can be specified multiple times
    #[arg(short, long = "domain", value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Only work on these languages. Can be specified multiple times
    #[arg(short, long = "language", value_name = "LANGUAGE")]
    pub languages: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn scope(&self) -> Scope {
        Scope::new(self.domains.clone(), self.languages.clone())
    }
}

#[derive(Debug, Args)]
pub struct AddCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GuessCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Stop after inserting this many translations
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct SortCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MetricsCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the metrics as JSON
    #[arg(long)]
    pub json: bool,

    /// Write missing.<language>.yml files with the missing keys.
    /// Defaults to `export_path` from the config, then the system temp dir
    #[arg(short, long, value_name = "DIR", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate missing keys one by one from the terminal
    Add(AddCommand),
    /// Fill missing keys with suggestions from the configured guess command
    Guess(GuessCommand),
    /// Sort every translation file by key
    Sort(SortCommand),
    /// Show how complete each language is
    Metrics(MetricsCommand),
    /// Initialize a new .transcat.yml configuration file
    Init,
}
