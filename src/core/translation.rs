use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde_yaml::Value;

use super::structure::Structure;

/// Identity of a repository: the (dirname, domain, language) triple.
///
/// Translations hold this instead of a pointer to their owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepositoryRef {
    pub dirname: PathBuf,
    pub domain: String,
    pub language: String,
}

impl RepositoryRef {
    pub fn new(
        dirname: impl Into<PathBuf>,
        domain: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            dirname: dirname.into(),
            domain: domain.into(),
            language: language.into(),
        }
    }

    pub fn matches(&self, dirname: &Path, domain: &str, language: &str) -> bool {
        self.dirname == dirname && self.domain == domain && self.language == language
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}.{}",
            self.dirname.display(),
            self.domain,
            self.language
        )
    }
}

/// Handle to one translation: its repository plus its key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationRef {
    pub repository: RepositoryRef,
    pub key: String,
}

/// A single leaf of a translation document.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    key: String,
    value: Value,
    language: String,
    structure: Structure,
    repository: Option<RepositoryRef>,
    master: Option<TranslationRef>,
}

impl Translation {
    pub fn new(key: impl Into<String>, value: impl Into<Value>, language: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            language: language.into(),
            structure: Structure::default(),
            repository: None,
            master: None,
        }
    }

    pub fn with_structure(mut self, structure: Structure) -> Self {
        self.structure = structure;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Set the value and move it down into the structure fragment.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
        self.sync_structure();
    }

    /// Overwrite the fragment's leaf with the current value.
    pub(crate) fn sync_structure(&mut self) {
        self.structure = self.structure.with_leaf(self.value.clone());
    }

    /// Null and `""` mean "not translated yet".
    pub fn is_empty(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// The value as display text. Non-string scalars use their YAML form.
    pub fn text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => serde_yaml::to_string(other)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn repository(&self) -> Option<&RepositoryRef> {
        self.repository.as_ref()
    }

    pub(crate) fn set_repository(&mut self, repository: RepositoryRef) {
        self.repository = Some(repository);
    }

    pub fn master(&self) -> Option<&TranslationRef> {
        self.master.as_ref()
    }

    pub(crate) fn set_master(&mut self, master: TranslationRef) {
        self.master = Some(master);
    }

    /// Handle to this translation, if it belongs to a repository.
    pub fn reference(&self) -> Option<TranslationRef> {
        self.repository.as_ref().map(|repository| TranslationRef {
            repository: repository.clone(),
            key: self.key.clone(),
        })
    }
}
