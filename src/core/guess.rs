//! Machine suggestions for missing translations.
//!
//! The crate does not talk to any translation service itself. A configured
//! external program is run once per candidate and its stdout is taken as the
//! suggested value.

use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Something that can propose a translation of `text` from one language to
/// another.
pub trait Guesser {
    fn guess(&self, text: &str, from: &str, to: &str) -> Result<String>;
}

/// Runs `program args...` with `{text}`, `{from}` and `{to}` substituted in
/// every argument.
#[derive(Debug, Clone)]
pub struct CommandGuesser {
    program: String,
    args: Vec<String>,
}

impl CommandGuesser {
    /// `command` is the program followed by its arguments. `None` when empty.
    pub fn new(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    fn expand(arg: &str, text: &str, from: &str, to: &str) -> String {
        arg.replace("{from}", from)
            .replace("{to}", to)
            .replace("{text}", text)
    }
}

impl Guesser for CommandGuesser {
    fn guess(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| Self::expand(arg, text, from, to))
            .collect();
        debug!(program = %self.program, ?args, "running guess command");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| Error::guess(text, format!("failed to run '{}': {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::guess(
                text,
                format!("'{}' exited with {}: {}", self.program, output.status, stderr.trim()),
            ));
        }

        let guessed = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if guessed.is_empty() {
            return Err(Error::guess(text, format!("'{}' printed nothing", self.program)));
        }

        Ok(guessed)
    }
}
