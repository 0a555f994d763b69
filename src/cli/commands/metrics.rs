use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

use super::helper::{ProjectContext, load_project};
use crate::{
    cli::{args::MetricsCommand, exit_status::ExitStatus, report},
    core::{Metrics, metrics::export_missing},
};

pub fn metrics(cmd: MetricsCommand) -> Result<ExitStatus> {
    let mut stdout = io::stdout().lock();

    if cmd.json {
        let ctx = load_project(&cmd.common)?;
        let metrics = Metrics::collect(&ctx.project, &ctx.scope);
        serde_json::to_writer_pretty(&mut stdout, &metrics)
            .context("Failed to serialize metrics")?;
        writeln!(stdout)?;
        if let Some(dir) = &cmd.export {
            export(&ctx, dir.clone(), &mut io::sink())?;
        }
        return Ok(ExitStatus::Success);
    }

    let timer = report::CommandTimer::start(&mut stdout)?;
    let ctx = load_project(&cmd.common)?;
    let metrics = Metrics::collect(&ctx.project, &ctx.scope);
    report::metrics_to(&mut stdout, &metrics)?;

    if let Some(dir) = &cmd.export {
        export(&ctx, dir.clone(), &mut stdout)?;
    }

    timer.finish(&mut stdout)?;
    Ok(ExitStatus::Success)
}

/// `--export DIR`, else `export_path` from the config (relative to the config
/// file), else the system temp dir.
fn export_dir(ctx: &ProjectContext, requested: Option<PathBuf>) -> PathBuf {
    requested
        .or_else(|| {
            ctx.loaded
                .config
                .export_path
                .as_ref()
                .map(|path| ctx.loaded.base_dir().join(path))
        })
        .unwrap_or_else(env::temp_dir)
}

fn export<W: Write>(ctx: &ProjectContext, requested: Option<PathBuf>, writer: &mut W) -> Result<()> {
    let dir = export_dir(ctx, requested);
    let written = export_missing(&ctx.project, &ctx.scope, &dir)
        .with_context(|| format!("Failed to export missing keys to {}", dir.display()))?;

    for (language, path) in &written {
        report::export_to(writer, language, path)?;
    }
    Ok(())
}
