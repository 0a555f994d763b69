use std::path::{Path, PathBuf};

use super::{
    collection::{RepositoryAccess, Scope, TranslationAccess},
    repository::Repository,
    translation::{RepositoryRef, Translation, TranslationRef},
};
use crate::error::Result;

/// All repositories of a project, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct RepositoryCollection {
    repositories: Vec<Repository>,
}

impl RepositoryCollection {
    pub fn new(repositories: Vec<Repository>) -> Self {
        Self { repositories }
    }

    pub fn add_repository(&mut self, repository: Repository) {
        self.repositories.push(repository);
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Position of the repository with this exact (dirname, domain, language).
    pub fn position(&self, dirname: &Path, domain: &str, language: &str) -> Option<usize> {
        self.repositories
            .iter()
            .position(|r| r.reference().matches(dirname, domain, language))
    }

    pub fn find(&self, reference: &RepositoryRef) -> Option<&Repository> {
        self.position(&reference.dirname, &reference.domain, &reference.language)
            .map(|index| &self.repositories[index])
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Repository> {
        self.repositories.get_mut(index)
    }

    /// Follow a translation handle, empty values included.
    pub fn resolve(&self, reference: &TranslationRef) -> Option<&Translation> {
        self.find(&reference.repository)
            .and_then(|repository| repository.translation(&reference.key))
    }

    pub fn sort(&mut self) {
        for repository in &mut self.repositories {
            repository.sort();
        }
    }

    /// Save every repository. Returns the written paths.
    pub fn save(&self) -> Result<Vec<PathBuf>> {
        self.repositories.iter().map(Repository::save).collect()
    }
}

impl RepositoryAccess for RepositoryCollection {
    fn repositories(&self, scope: &Scope) -> Vec<&Repository> {
        self.repositories
            .iter()
            .filter(|r| scope.matches(r.domain(), r.language()))
            .collect()
    }
}

impl TranslationAccess for RepositoryCollection {
    fn translations_where<F>(&self, scope: &Scope, filter: F) -> Vec<&Translation>
    where
        F: Fn(&Translation) -> bool,
    {
        self.repositories(scope)
            .into_iter()
            .flat_map(|repository| repository.translations_where(scope, &filter))
            .collect()
    }
}
