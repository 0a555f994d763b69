//! Top-level handle over every translation document of a project.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, warn};

use super::{
    collection::{RepositoryAccess, Scope, TranslationAccess},
    file_scanner::{resolve_search_paths, scan_translation_files},
    repository::{Repository, build_repository_path},
    repository_collection::RepositoryCollection,
    translation::{Translation, TranslationRef},
};
use crate::{
    config::Config,
    error::{Error, Result},
};

/// A key present in the master language but missing in `language`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub language: String,
    pub key: String,
}

#[derive(Debug)]
pub struct Project {
    master_language: String,
    available_languages: Vec<String>,
    paths: Vec<PathBuf>,
    repositories: RepositoryCollection,
}

impl Project {
    /// Discover and parse every translation document below `paths`.
    ///
    /// Files whose names do not follow `<domain>.<language>.<ext>` are skipped.
    pub fn create(
        master_language: impl Into<String>,
        available_languages: Vec<String>,
        paths: Vec<PathBuf>,
    ) -> Result<Self> {
        let mut repositories = RepositoryCollection::default();

        for file in scan_translation_files(&paths)? {
            match Repository::from_file(&file) {
                Ok(repository) => repositories.add_repository(repository),
                Err(Error::InvalidFileName(name)) => {
                    warn!(file = %name, "skipping file without <domain>.<language>.<ext> name");
                }
                Err(e) => return Err(e),
            }
        }
        debug!(repositories = repositories.len(), "project loaded");

        Ok(Self {
            master_language: master_language.into(),
            available_languages,
            paths,
            repositories,
        })
    }

    /// Build a project from a loaded config. Relative search paths are
    /// resolved against `base_dir`, the directory holding the config file.
    pub fn from_config(config: &Config, base_dir: &Path) -> Result<Self> {
        let paths = resolve_search_paths(base_dir, &config.paths)?;
        Self::create(
            config.master_language.clone(),
            config.languages.clone(),
            paths,
        )
    }

    pub fn master_language(&self) -> &str {
        &self.master_language
    }

    pub fn available_languages(&self) -> &[String] {
        &self.available_languages
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn repository_collection(&self) -> &RepositoryCollection {
        &self.repositories
    }

    /// First non-empty translation with `key` in `language`.
    pub fn translation(&self, language: &str, key: &str) -> Option<&Translation> {
        self.repositories
            .translations_where(&Scope::language(language), |t| t.key() == key)
            .into_iter()
            .next()
    }

    /// First non-empty master translation with `key` inside the scope's domains.
    pub fn master_translation(&self, scope: &Scope, key: &str) -> Option<&Translation> {
        self.repositories
            .translations_where(&scope.for_language(&self.master_language), |t| {
                t.key() == key
            })
            .into_iter()
            .next()
    }

    /// The master translation a candidate was synthesized from.
    pub fn master_of(&self, translation: &Translation) -> Option<&Translation> {
        translation
            .master()
            .and_then(|reference| self.repositories.resolve(reference))
    }

    /// Target languages for a search: the filter, or every available language.
    /// The master language is never a target.
    fn target_languages(&self, scope: &Scope) -> Vec<String> {
        let languages = if scope.languages.is_empty() {
            &self.available_languages
        } else {
            &scope.languages
        };

        languages
            .iter()
            .filter(|language| **language != self.master_language)
            .cloned()
            .collect()
    }

    /// Every (language, key) pair where the key has a value in the master
    /// language and none in the target language.
    pub fn missing_candidates(&self, scope: &Scope) -> Result<Vec<Candidate>> {
        if scope.languages.contains(&self.master_language) {
            return Err(Error::MasterLanguageSearch(self.master_language.clone()));
        }

        let master_keys = self.keys(&scope.for_language(&self.master_language));

        let mut candidates = Vec::new();
        for language in self.target_languages(scope) {
            let language_keys: HashSet<&str> =
                self.keys(&scope.for_language(&language)).into_iter().collect();

            candidates.extend(
                master_keys
                    .iter()
                    .filter(|key| !language_keys.contains(*key))
                    .map(|key| Candidate {
                        language: language.clone(),
                        key: key.to_string(),
                    }),
            );
        }

        Ok(candidates)
    }

    /// A random missing translation, or `None` once nothing is missing.
    pub fn random_missing_translation(&self, scope: &Scope) -> Result<Option<Translation>> {
        self.random_missing_translation_with(scope, &mut rand::thread_rng())
    }

    /// Same as [`Project::random_missing_translation`] with a caller-supplied
    /// random source.
    pub fn random_missing_translation_with<R: Rng + ?Sized>(
        &self,
        scope: &Scope,
        rng: &mut R,
    ) -> Result<Option<Translation>> {
        let candidates = self.missing_candidates(scope)?;
        match candidates.choose(rng) {
            Some(candidate) => self.candidate_translation(candidate, scope).map(Some),
            None => Ok(None),
        }
    }

    /// Synthesize the empty translation for a candidate, linked to its master.
    ///
    /// The master is taken from the domains of `scope`, the same ones the
    /// candidate was computed from.
    pub fn candidate_translation(
        &self,
        candidate: &Candidate,
        scope: &Scope,
    ) -> Result<Translation> {
        let master = self
            .master_translation(scope, &candidate.key)
            .ok_or_else(|| Error::MasterNotFound {
                language: self.master_language.clone(),
                key: candidate.key.clone(),
            })?;
        let master_ref = master
            .reference()
            .ok_or_else(|| Error::DetachedTranslation(candidate.key.clone()))?;

        let mut translation = Translation::new(candidate.key.clone(), "", candidate.language.clone())
            .with_structure(master.structure().clone());
        translation.set_master(master_ref);
        Ok(translation)
    }

    /// Insert a filled-in candidate into the repository for its language,
    /// next to the master document. The repository is created when missing.
    pub fn add_translation(&mut self, mut translation: Translation) -> Result<()> {
        if translation.language() == self.master_language {
            return Err(Error::MasterLanguageInsert(self.master_language.clone()));
        }

        let master_ref: TranslationRef = translation
            .master()
            .cloned()
            .ok_or_else(|| Error::DetachedTranslation(translation.key().to_string()))?;
        let master_repository = self
            .repositories
            .find(&master_ref.repository)
            .ok_or_else(|| Error::MasterNotFound {
                language: master_ref.repository.language.clone(),
                key: master_ref.key.clone(),
            })?;

        let dirname = master_repository.dirname().to_path_buf();
        let domain = master_repository.domain().to_string();
        let extension = master_repository.extension().to_string();
        let language = translation.language().to_string();

        translation.sync_structure();

        let index = match self.repositories.position(&dirname, &domain, &language) {
            Some(index) => index,
            None => {
                let path = build_repository_path(&dirname, &domain, &language, &extension);
                debug!(path = %path.display(), "creating repository");
                self.repositories.add_repository(Repository::empty(&path)?);
                self.repositories.len() - 1
            }
        };

        match self.repositories.get_mut(index) {
            Some(repository) => repository.add_translation(translation),
            None => Err(Error::DetachedTranslation(translation.key().to_string())),
        }
    }

    pub fn sort(&mut self) {
        self.repositories.sort();
    }

    pub fn save(&self) -> Result<Vec<PathBuf>> {
        self.repositories.save()
    }
}

impl RepositoryAccess for Project {
    fn repositories(&self, scope: &Scope) -> Vec<&Repository> {
        self.repositories.repositories(scope)
    }
}

impl TranslationAccess for Project {
    fn translations_where<F>(&self, scope: &Scope, filter: F) -> Vec<&Translation>
    where
        F: Fn(&Translation) -> bool,
    {
        self.repositories.translations_where(scope, filter)
    }
}
