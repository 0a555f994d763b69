use std::{
    collections::HashSet,
    io::{self, BufRead, Write},
};

use anyhow::Result;
use rand::Rng;

use super::{
    SessionSummary,
    helper::{candidate_of, load_project, next_missing, original_text},
};
use crate::{
    cli::{args::AddCommand, exit_status::ExitStatus, report},
    core::{Project, Scope},
    utils::plural,
};

pub fn add(cmd: AddCommand) -> Result<ExitStatus> {
    let mut stdout = io::stdout().lock();
    let timer = report::CommandTimer::start(&mut stdout)?;

    let mut ctx = load_project(&cmd.common)?;
    let stdin = io::stdin();
    let summary = add_session(
        &mut ctx.project,
        &ctx.scope,
        &mut stdin.lock(),
        &mut stdout,
        &mut rand::thread_rng(),
    )?;

    report::success_to(
        &mut stdout,
        &format!(
            "Added {} {}",
            summary.inserted,
            plural(summary.inserted, "translation")
        ),
    )?;
    timer.finish(&mut stdout)?;
    Ok(ExitStatus::Success)
}

/// Ask for missing translations until none are left or `input` hits EOF.
///
/// An empty answer skips the candidate for the rest of the session. Every
/// accepted answer is inserted and saved right away.
pub fn add_session<I, W, R>(
    project: &mut Project,
    scope: &Scope,
    input: &mut I,
    output: &mut W,
    rng: &mut R,
) -> Result<SessionSummary>
where
    I: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    let mut summary = SessionSummary::default();
    let mut skipped = HashSet::new();

    loop {
        let Some(mut translation) = next_missing(project, scope, &skipped, rng)? else {
            report::message_to(output, "No more translations for you!")?;
            break;
        };

        let original = original_text(project, &translation);
        report::candidate_to(output, translation.language(), translation.key(), &original)?;
        report::prompt_to(output, "Translation")?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.trim().is_empty() {
            skipped.insert(candidate_of(&translation));
            summary.skipped += 1;
            continue;
        }

        translation.set_value(answer);
        project.add_translation(translation)?;
        project.save()?;
        summary.inserted += 1;
        writeln!(output)?;
    }

    Ok(summary)
}
