use std::{
    collections::HashSet,
    io::{self, Write},
};

use anyhow::{Context, Result, anyhow};
use rand::Rng;

use super::{
    SessionSummary,
    helper::{candidate_of, load_project, next_missing, original_text},
};
use crate::{
    cli::{args::GuessCommand, exit_status::ExitStatus, report},
    core::{CommandGuesser, Guesser, Project, Scope},
    utils::plural,
};

pub fn guess(cmd: GuessCommand) -> Result<ExitStatus> {
    let mut stdout = io::stdout().lock();
    let timer = report::CommandTimer::start(&mut stdout)?;

    let mut ctx = load_project(&cmd.common)?;
    let command = ctx
        .loaded
        .config
        .guess_command
        .as_deref()
        .ok_or_else(|| {
            anyhow!(
                "No 'guess_command' configured in {}",
                ctx.loaded.path.display()
            )
        })?;
    let guesser = CommandGuesser::new(command).context("'guess_command' is empty")?;

    let summary = guess_session(
        &mut ctx.project,
        &ctx.scope,
        &guesser,
        cmd.limit,
        &mut stdout,
        &mut rand::thread_rng(),
    )?;

    report::success_to(
        &mut stdout,
        &format!(
            "Guessed {} {}, {} failed",
            summary.inserted,
            plural(summary.inserted, "translation"),
            summary.skipped
        ),
    )?;
    timer.finish(&mut stdout)?;
    Ok(ExitStatus::Success)
}

/// Fill missing translations with `guesser` until none are left or `limit`
/// insertions were made.
///
/// A failed guess is reported and the candidate is left alone for the rest of
/// the session.
pub fn guess_session<G, W, R>(
    project: &mut Project,
    scope: &Scope,
    guesser: &G,
    limit: Option<usize>,
    output: &mut W,
    rng: &mut R,
) -> Result<SessionSummary>
where
    G: Guesser + ?Sized,
    W: Write,
    R: Rng + ?Sized,
{
    let mut summary = SessionSummary::default();
    let mut skipped = HashSet::new();
    let master_language = project.master_language().to_string();

    loop {
        if limit.is_some_and(|limit| summary.inserted >= limit) {
            break;
        }

        let Some(mut translation) = next_missing(project, scope, &skipped, rng)? else {
            report::message_to(output, "No more translations for you!")?;
            break;
        };

        let original = original_text(project, &translation);
        report::candidate_to(output, translation.language(), translation.key(), &original)?;

        let guessed = match guesser.guess(&original, &master_language, translation.language()) {
            Ok(guessed) => guessed,
            Err(err) => {
                report::failure_to(output, &format!("{} ({})", err, translation.key()))?;
                skipped.insert(candidate_of(&translation));
                summary.skipped += 1;
                writeln!(output)?;
                continue;
            }
        };
        report::message_to(output, &format!("Translation : {}", guessed))?;

        translation.set_value(guessed);
        project.add_translation(translation)?;
        project.save()?;
        summary.inserted += 1;
        writeln!(output)?;
    }

    Ok(summary)
}
