//! Completion metrics per language and the missing-keys export.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::{
    collection::{Scope, TranslationAccess},
    project::Project,
};
use crate::{
    error::{Error, Result},
    utils::write_atomic,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageMetrics {
    pub language: String,
    /// Keys with a value in this language that also exist in the master.
    pub translated: usize,
    pub missing: usize,
    /// Percentage of master keys translated, 0 when the master is empty.
    pub completion: f64,
    pub is_master: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub master_language: String,
    pub master_count: usize,
    /// Sorted by `translated`, descending.
    pub languages: Vec<LanguageMetrics>,
}

pub fn completion(count: usize, master_count: usize) -> f64 {
    if master_count == 0 {
        0.0
    } else {
        100.0 * count as f64 / master_count as f64
    }
}

/// Non-master languages covered by `scope`: the filter restricted to the
/// available languages, or all available languages.
pub fn target_languages(project: &Project, scope: &Scope) -> Vec<String> {
    project
        .available_languages()
        .iter()
        .filter(|language| scope.matches_language(language))
        .filter(|language| *language != project.master_language())
        .cloned()
        .collect()
}

impl Metrics {
    pub fn collect(project: &Project, scope: &Scope) -> Self {
        let master_language = project.master_language().to_string();
        let master_keys: HashSet<&str> = project
            .keys(&scope.for_language(&master_language))
            .into_iter()
            .collect();
        let master_count = master_keys.len();

        let mut languages = vec![LanguageMetrics {
            language: master_language.clone(),
            translated: master_count,
            missing: 0,
            completion: completion(master_count, master_count),
            is_master: true,
        }];

        for language in target_languages(project, scope) {
            let translated = project
                .keys(&scope.for_language(&language))
                .into_iter()
                .filter(|key| master_keys.contains(key))
                .count();

            languages.push(LanguageMetrics {
                missing: master_count - translated,
                completion: completion(translated, master_count),
                language,
                translated,
                is_master: false,
            });
        }

        // Stable: the master row stays first on ties
        languages.sort_by(|a, b| b.translated.cmp(&a.translated));

        Self {
            master_language,
            master_count,
            languages,
        }
    }
}

/// For each target language, the master entries it lacks, rebuilt as a
/// nested document.
pub fn missing_documents(project: &Project, scope: &Scope) -> Result<Vec<(String, Mapping)>> {
    let master_language = project.master_language();
    let mut documents = Vec::new();

    for language in target_languages(project, scope) {
        let mut document = Mapping::new();
        for candidate in project.missing_candidates(&scope.for_language(&language))? {
            let master = project
                .master_translation(scope, &candidate.key)
                .ok_or_else(|| Error::MasterNotFound {
                    language: master_language.to_string(),
                    key: candidate.key.clone(),
                })?;
            master.structure().merge_into(&mut document);
        }
        documents.push((language, document));
    }

    Ok(documents)
}

/// `missing.<language>.yml`
pub fn export_file_name(language: &str) -> String {
    format!("missing.{}.yml", language)
}

/// Write one `missing.<language>.yml` per target language into `export_dir`.
/// Returns each language with the file written for it.
pub fn export_missing(
    project: &Project,
    scope: &Scope,
    export_dir: &Path,
) -> Result<Vec<(String, PathBuf)>> {
    let mut written = Vec::new();

    for (language, document) in missing_documents(project, scope)? {
        let path = export_dir.join(export_file_name(&language));
        let content = serde_yaml::to_string(&Value::Mapping(document)).map_err(|source| {
            Error::Serialize {
                path: path.clone(),
                source,
            }
        })?;
        write_atomic(&path, &content)?;
        debug!(path = %path.display(), "exported missing keys");
        written.push((language, path));
    }

    Ok(written)
}
