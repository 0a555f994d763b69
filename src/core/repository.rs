//! One on-disk translation document for a (domain, language) pair.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use super::{
    collection::{Scope, TranslationAccess, TranslationCollection},
    structure::{Structure, key_segment},
    translation::{RepositoryRef, Translation},
};
use crate::{
    error::{Error, Result},
    utils::write_atomic,
};

/// Extension used for repositories that do not exist on disk yet.
pub const DEFAULT_EXTENSION: &str = "yml";

/// Parts of a `<domain>.<language>.<ext>` file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName {
    pub domain: String,
    pub language: String,
    pub extension: String,
}

/// Split a file name on `.` into domain, language and extension.
///
/// Anything after the second dot belongs to the extension.
///
/// - `messages.en.yml` -> (`messages`, `en`, `yml`)
/// - `messages.pt_BR.yaml` -> (`messages`, `pt_BR`, `yaml`)
/// - `messages.yml` -> error
pub fn parse_file_name(path: &Path) -> Result<FileName> {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidFileName(path.display().to_string()))?;

    let mut parts = file_name.splitn(3, '.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(domain), Some(language), Some(extension))
            if !domain.is_empty() && !language.is_empty() && !extension.is_empty() =>
        {
            Ok(FileName {
                domain: domain.to_string(),
                language: language.to_string(),
                extension: extension.to_string(),
            })
        }
        _ => Err(Error::InvalidFileName(file_name.to_string())),
    }
}

/// `<dirname>/<domain>.<language>.<extension>`
pub fn build_repository_path(
    dirname: &Path,
    domain: &str,
    language: &str,
    extension: &str,
) -> PathBuf {
    dirname.join(format!("{}.{}.{}", domain, language, extension))
}

#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
    domain: String,
    language: String,
    extension: String,
    translations: TranslationCollection,
}

impl Repository {
    fn new(path: PathBuf, name: FileName, translations: Vec<Translation>) -> Self {
        let mut repository = Self {
            path,
            domain: name.domain,
            language: name.language,
            extension: name.extension,
            translations: TranslationCollection::new(translations),
        };

        let reference = repository.reference();
        for translation in repository.translations.iter_mut() {
            translation.set_repository(reference.clone());
        }
        repository
    }

    /// Load and flatten the document at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let name = parse_file_name(path)?;
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let translations = flatten_document(path, &content, &name.language)?;
        debug!(
            path = %path.display(),
            translations = translations.len(),
            "loaded repository"
        );

        Ok(Self::new(path.to_path_buf(), name, translations))
    }

    /// A repository with no translations, saved to `path` on first save.
    pub fn empty(path: &Path) -> Result<Self> {
        let name = parse_file_name(path)?;
        Ok(Self::new(path.to_path_buf(), name, Vec::new()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dirname(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn reference(&self) -> RepositoryRef {
        RepositoryRef::new(self.dirname(), &self.domain, &self.language)
    }

    /// Canonical path derived from dirname, domain, language and extension.
    pub fn build_path(&self) -> PathBuf {
        build_repository_path(self.dirname(), &self.domain, &self.language, &self.extension)
    }

    /// Every translation, including the ones without a value.
    pub fn all_translations(&self) -> &[Translation] {
        self.translations.all()
    }

    pub fn translation(&self, key: &str) -> Option<&Translation> {
        self.translations.all().iter().find(|t| t.key() == key)
    }

    pub fn add_translation(&mut self, mut translation: Translation) -> Result<()> {
        if translation.language() != self.language {
            return Err(Error::LanguageMismatch {
                key: translation.key().to_string(),
                expected: self.language.clone(),
                found: translation.language().to_string(),
            });
        }

        translation.set_repository(self.reference());
        self.translations.add_translation(translation);
        Ok(())
    }

    pub fn sort(&mut self) {
        self.translations.sort();
    }

    /// Rebuild the nested document from the non-empty translations.
    pub fn to_document(&self) -> Mapping {
        let mut document = Mapping::new();
        for translation in self.translations(&Scope::all()) {
            translation.structure().merge_into(&mut document);
        }
        document
    }

    pub fn render(&self) -> Result<String> {
        serde_yaml::to_string(&Value::Mapping(self.to_document())).map_err(|source| {
            Error::Serialize {
                path: self.build_path(),
                source,
            }
        })
    }

    /// Write the rebuilt document to its canonical path.
    pub fn save(&self) -> Result<PathBuf> {
        let path = self.build_path();
        let content = self.render()?;
        write_atomic(&path, &content)?;
        debug!(path = %path.display(), "saved repository");
        Ok(path)
    }
}

impl TranslationAccess for Repository {
    fn translations_where<F>(&self, scope: &Scope, filter: F) -> Vec<&Translation>
    where
        F: Fn(&Translation) -> bool,
    {
        if !scope.matches(&self.domain, &self.language) {
            return Vec::new();
        }
        self.translations.translations_where(scope, filter)
    }
}

/// Parse a YAML document and flatten it into one translation per leaf.
///
/// Empty documents and a `null` root yield no translations.
pub fn flatten_document(path: &Path, content: &str, language: &str) -> Result<Vec<Translation>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let root: Value =
        serde_yaml::from_str(content).map_err(|e| Error::parse(path, e.to_string()))?;

    let mut translations = Vec::new();
    match root {
        Value::Null => {}
        Value::Mapping(map) => flatten_mapping(&map, &mut Vec::new(), language, &mut translations),
        _ => return Err(Error::parse(path, "document root must be a mapping")),
    }

    // `a.b: x` and `a: {b: y}` flatten to the same key
    let mut seen = HashSet::new();
    translations.retain(|translation| {
        let first = seen.insert(translation.key().to_string());
        if !first {
            warn!(
                file = %path.display(),
                key = %translation.key(),
                "duplicate translation key, keeping the first value; saving this file drops the other one"
            );
        }
        first
    });
    Ok(translations)
}

fn flatten_mapping(
    map: &Mapping,
    path: &mut Vec<Value>,
    language: &str,
    result: &mut Vec<Translation>,
) {
    for (key, value) in map {
        path.push(key.clone());
        match value {
            Value::Mapping(children) => flatten_mapping(children, path, language, result),
            leaf => {
                let dotted: Vec<String> = path.iter().map(key_segment).collect();
                let built_key = dotted.join(".").trim_matches('.').to_string();
                let structure = Structure::from_path(path, leaf.clone());
                result.push(
                    Translation::new(built_key, leaf.clone(), language).with_structure(structure),
                );
            }
        }
        path.pop();
    }
}
