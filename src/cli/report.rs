//! Console output for the CLI commands.
//!
//! Every line is prefixed with a colored `[transcat]` header. Functions take a
//! writer so commands can be driven against buffers in tests.

use std::{
    env,
    io::{self, Write},
    path::Path,
    time::Instant,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{LanguageMetrics, Metrics};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const HEADER: &str = "[transcat]";

/// Set to any value to drop elapsed times from the output.
pub const DISABLE_TIMING_ENV: &str = "TRANSCAT_DISABLE_TIMING";

fn timing_enabled() -> bool {
    env::var_os(DISABLE_TIMING_ENV).is_none()
}

pub fn message_to<W: Write>(writer: &mut W, body: &str) -> io::Result<()> {
    writeln!(writer, "{} {}", HEADER.green(), body)
}

pub fn failure_to<W: Write>(writer: &mut W, body: &str) -> io::Result<()> {
    writeln!(writer, "{} {} {}", HEADER.red(), FAILURE_MARK.red(), body)
}

pub fn success_to<W: Write>(writer: &mut W, body: &str) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} {}",
        HEADER.green(),
        SUCCESS_MARK.green(),
        body.green()
    )
}

/// Prompt without a trailing newline. The answer is read by the caller.
pub fn prompt_to<W: Write>(writer: &mut W, label: &str) -> io::Result<()> {
    write!(writer, "{} {} : ", HEADER.green(), label)?;
    writer.flush()
}

/// Start and finish lines around a command run.
pub struct CommandTimer {
    started: Instant,
}

impl CommandTimer {
    pub fn start<W: Write>(writer: &mut W) -> io::Result<Self> {
        message_to(writer, "Command started")?;
        Ok(Self {
            started: Instant::now(),
        })
    }

    pub fn finish<W: Write>(self, writer: &mut W) -> io::Result<()> {
        if timing_enabled() {
            let elapsed = self.started.elapsed().as_millis();
            message_to(
                writer,
                &format!("Command finished in {} milliseconds", elapsed),
            )
        } else {
            message_to(writer, "Command finished")
        }
    }
}

/// Language, key and master value of the candidate being translated.
pub fn candidate_to<W: Write>(
    writer: &mut W,
    language: &str,
    key: &str,
    original: &str,
) -> io::Result<()> {
    message_to(writer, &format!("Language : {}", language.cyan()))?;
    message_to(writer, &format!("Key : {}", key.bold()))?;
    message_to(writer, &format!("Original : {}", original))
}

fn metrics_line(metric: &LanguageMetrics, width: usize) -> String {
    let padding = width.saturating_sub(metric.language.width());
    let line = format!(
        "Translations for [{}]{} is {:.2}% completed. {} missing",
        metric.language,
        " ".repeat(padding),
        metric.completion,
        metric.missing
    );
    if metric.is_master {
        format!("{} {}", line, "(master)".dimmed())
    } else {
        line
    }
}

pub fn metrics_to<W: Write>(writer: &mut W, metrics: &Metrics) -> io::Result<()> {
    let width = metrics
        .languages
        .iter()
        .map(|m| m.language.width())
        .max()
        .unwrap_or(0);

    for metric in &metrics.languages {
        message_to(writer, &metrics_line(metric, width))?;
    }
    Ok(())
}

pub fn export_to<W: Write>(writer: &mut W, language: &str, path: &Path) -> io::Result<()> {
    message_to(
        writer,
        &format!("Export missing file in {} for {}", path.display(), language),
    )
}
