//! Filtered access to translations and repositories.
//!
//! Each entity implements one required primitive (`translations_where` or
//! `repositories`); everything else is shared through default methods.

use std::collections::HashSet;

use super::{repository::Repository, translation::Translation};

/// A (domains, languages) filter. Empty lists match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub domains: Vec<String>,
    pub languages: Vec<String>,
}

impl Scope {
    pub fn new(domains: Vec<String>, languages: Vec<String>) -> Self {
        Self { domains, languages }
    }

    pub fn all() -> Self {
        Self::default()
    }

    /// Keep the domain filter, narrow to a single language.
    pub fn for_language(&self, language: &str) -> Self {
        Self {
            domains: self.domains.clone(),
            languages: vec![language.to_string()],
        }
    }

    pub fn language(language: &str) -> Self {
        Self::all().for_language(language)
    }

    pub fn matches_domain(&self, domain: &str) -> bool {
        self.domains.is_empty() || self.domains.iter().any(|d| d == domain)
    }

    pub fn matches_language(&self, language: &str) -> bool {
        self.languages.is_empty() || self.languages.iter().any(|l| l == language)
    }

    pub fn matches(&self, domain: &str, language: &str) -> bool {
        self.matches_domain(domain) && self.matches_language(language)
    }
}

pub trait TranslationAccess {
    /// Non-empty translations within `scope` accepted by `filter`.
    fn translations_where<F>(&self, scope: &Scope, filter: F) -> Vec<&Translation>
    where
        F: Fn(&Translation) -> bool;

    fn translations(&self, scope: &Scope) -> Vec<&Translation> {
        self.translations_where(scope, |_| true)
    }

    /// Keys of the non-empty translations within `scope`, first occurrence
    /// order, without duplicates.
    fn keys(&self, scope: &Scope) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.translations(scope)
            .into_iter()
            .map(Translation::key)
            .filter(|key| seen.insert(*key))
            .collect()
    }
}

pub trait RepositoryAccess {
    fn repositories(&self, scope: &Scope) -> Vec<&Repository>;
}

/// Ordered translations of one repository.
#[derive(Debug, Clone, Default)]
pub struct TranslationCollection {
    translations: Vec<Translation>,
}

impl TranslationCollection {
    pub fn new(translations: Vec<Translation>) -> Self {
        Self { translations }
    }

    /// Append `translation`, or replace the entry holding the same key in
    /// place so a key stays unique and keeps its position.
    pub fn add_translation(&mut self, translation: Translation) {
        match self
            .translations
            .iter_mut()
            .find(|existing| existing.key() == translation.key())
        {
            Some(existing) => *existing = translation,
            None => self.translations.push(translation),
        }
    }

    /// Every stored translation, empty values included.
    pub fn all(&self) -> &[Translation] {
        &self.translations
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Translation> {
        self.translations.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Stable sort by key, byte-wise ascending.
    pub fn sort(&mut self) {
        self.translations.sort_by(|a, b| a.key().cmp(b.key()));
    }
}

impl TranslationAccess for TranslationCollection {
    // Domain and language are properties of the owning repository, so the
    // scope is applied one level up.
    fn translations_where<F>(&self, _scope: &Scope, filter: F) -> Vec<&Translation>
    where
        F: Fn(&Translation) -> bool,
    {
        self.translations
            .iter()
            .filter(|t| !t.is_empty())
            .filter(|t| filter(t))
            .collect()
    }
}
