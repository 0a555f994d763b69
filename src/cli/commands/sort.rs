use std::io;

use anyhow::Result;

use super::helper::load_project;
use crate::{
    cli::{args::SortCommand, exit_status::ExitStatus, report},
    utils::plural,
};

pub fn sort(cmd: SortCommand) -> Result<ExitStatus> {
    let mut stdout = io::stdout().lock();
    let timer = report::CommandTimer::start(&mut stdout)?;

    let mut ctx = load_project(&cmd.common)?;
    ctx.project.sort();
    let written = ctx.project.save()?;

    report::success_to(
        &mut stdout,
        &format!(
            "Your translations have been sorted successfully ({} {})",
            written.len(),
            plural(written.len(), "file")
        ),
    )?;
    timer.finish(&mut stdout)?;
    Ok(ExitStatus::Success)
}
