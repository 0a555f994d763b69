use std::{collections::HashSet, env};

use anyhow::{Context, Result};
use rand::{Rng, seq::SliceRandom};

use crate::{
    cli::args::CommonArgs,
    config::{LoadedConfig, load_config},
    core::{Candidate, Project, Scope, Translation},
};

/// Everything a project command needs: the loaded config, the parsed
/// project, and the domain/language filter from the command line.
pub struct ProjectContext {
    pub loaded: LoadedConfig,
    pub project: Project,
    pub scope: Scope,
}

pub fn load_project(common: &CommonArgs) -> Result<ProjectContext> {
    let start_dir = match &common.config {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("Failed to read the current directory")?,
    };

    let loaded = load_config(&start_dir)?;
    let project = Project::from_config(&loaded.config, loaded.base_dir())
        .with_context(|| format!("Failed to load translations for {}", loaded.path.display()))?;

    Ok(ProjectContext {
        loaded,
        project,
        scope: common.scope(),
    })
}

/// A random missing translation, leaving out candidates already skipped in
/// this session.
pub fn next_missing<R: Rng + ?Sized>(
    project: &Project,
    scope: &Scope,
    skipped: &HashSet<Candidate>,
    rng: &mut R,
) -> Result<Option<Translation>> {
    let pool: Vec<Candidate> = project
        .missing_candidates(scope)?
        .into_iter()
        .filter(|candidate| !skipped.contains(candidate))
        .collect();

    match pool.choose(rng) {
        Some(candidate) => Ok(Some(project.candidate_translation(candidate, scope)?)),
        None => Ok(None),
    }
}

pub fn candidate_of(translation: &Translation) -> Candidate {
    Candidate {
        language: translation.language().to_string(),
        key: translation.key().to_string(),
    }
}

/// Text of the master translation the candidate was built from.
pub fn original_text(project: &Project, translation: &Translation) -> String {
    project
        .master_of(translation)
        .map(Translation::text)
        .unwrap_or_default()
}
