use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the catalog engine and its configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// No config file was found walking up from the start directory
    #[error("Config file \"{file_name}\" not found in {start_dir} or any parent directory")]
    ConfigNotFound {
        file_name: &'static str,
        start_dir: PathBuf,
    },

    /// A required config field is absent or has the wrong type
    #[error("Invalid config file {}: {reason}", file.display())]
    Config { file: PathBuf, reason: String },

    #[error("Failed to read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a YAML document
    #[error("Failed to parse YAML file {}:\n{reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to serialize YAML for {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// File name does not follow `<domain>.<language>.<ext>`
    #[error("Invalid translation file name '{0}', expected <domain>.<language>.<ext>")]
    InvalidFileName(String),

    #[error("Search path '{}' does not exist", .0.display())]
    SearchPathNotFound(PathBuf),

    #[error("Invalid search path pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("Failed to walk search path: {0}")]
    Walk(#[from] walkdir::Error),

    /// Missing translations are always relative to the master language
    #[error("You cannot search missing translations for the master language '{0}'")]
    MasterLanguageSearch(String),

    #[error("You cannot insert a new translation for the master language '{0}'")]
    MasterLanguageInsert(String),

    /// Only candidates synthesized from a master translation can be inserted
    #[error("Translation '{0}' is not linked to a master translation")]
    DetachedTranslation(String),

    #[error("Master translation '{key}' not found in language '{language}'")]
    MasterNotFound { language: String, key: String },

    #[error("Translation '{key}' has language '{found}' but repository expects '{expected}'")]
    LanguageMismatch {
        key: String,
        expected: String,
        found: String,
    },

    /// The external translation guesser failed for one candidate
    #[error("Could not guess a translation for '{key}': {reason}")]
    Guess { key: String, reason: String },
}

impl Error {
    pub fn config(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            file: file.into(),
            reason: reason.into(),
        }
    }

    pub fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn guess(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Guess {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
