//! Dispatches the parsed arguments to the matching command handler.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{add::add, guess::guess, init::init, metrics::metrics, sort::sort},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Add(cmd)) => add(cmd),
        Some(Command::Guess(cmd)) => guess(cmd),
        Some(Command::Sort(cmd)) => sort(cmd),
        Some(Command::Metrics(cmd)) => metrics(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
