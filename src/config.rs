use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".transcat.yml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub master_language: String,
    pub languages: Vec<String>,
    pub paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_path: Option<String>,
    /// Program followed by its arguments. `{text}`, `{from}` and `{to}` are
    /// substituted per call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guess_command: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            master_language: "en".to_string(),
            languages: vec!["en".to_string()],
            paths: vec!["translations".to_string()],
            export_path: None,
            guess_command: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// `file` is only used for the error message.
    pub fn validate(&self, file: &Path) -> Result<()> {
        if self.master_language.trim().is_empty() {
            return Err(Error::config(file, "'master_language' must not be empty"));
        }
        if self.languages.is_empty() {
            return Err(Error::config(file, "'languages' must list at least one language"));
        }
        if self.paths.is_empty() {
            return Err(Error::config(file, "'paths' must list at least one search path"));
        }
        let has_program = self.guess_command.as_ref().is_none_or(|command| {
            command
                .first()
                .is_some_and(|program| !program.trim().is_empty())
        });
        if !has_program {
            return Err(Error::config(file, "'guess_command' must start with a program"));
        }

        Ok(())
    }
}

pub fn default_config_yaml() -> Result<String> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    serde_yaml::to_string(&Config::default()).map_err(|source| Error::Serialize { path, source })
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
}

impl LoadedConfig {
    /// Directory holding the config file. Relative paths resolve against it.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

pub fn parse_config(path: &Path, content: &str) -> Result<Config> {
    let config: Config =
        serde_yaml::from_str(content).map_err(|e| Error::config(path, e.to_string()))?;
    config.validate(path)?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<LoadedConfig> {
    let path = find_config_file(start_dir).ok_or_else(|| Error::ConfigNotFound {
        file_name: CONFIG_FILE_NAME,
        start_dir: start_dir.to_path_buf(),
    })?;
    let content = fs::read_to_string(&path).map_err(|source| Error::Read {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&path, &content)?;

    Ok(LoadedConfig { config, path })
}
