use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod guess;
mod init;
mod metrics;
mod sort;

const BIN_NAME: &str = "transcat";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup at the project root
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with `.transcat.yml` listing `languages` (the first one is the
    /// master) and a `translations` search path.
    pub fn with_config(languages: &[&str]) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            ".transcat.yml",
            &format!(
                "master_language: {}\nlanguages: [{}]\npaths: [translations]\n",
                languages[0],
                languages.join(", ")
            ),
        )?;
        fs::create_dir_all(test.root().join("translations"))?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd.env("TRANSCAT_DISABLE_TIMING", "1"); // Disable timing for stable snapshots
        cmd
    }

    pub fn metrics_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("metrics");
        cmd
    }

    pub fn sort_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("sort");
        cmd
    }

    /// Run `cmd` with `input` piped to its stdin.
    pub fn run_with_input(&self, cmd: &mut Command, input: &str) -> Result<Output> {
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        let mut stdin = child.stdin.take().context("stdin was not piped")?;
        // The command may exit before reading everything
        let _ = stdin.write_all(input.as_bytes());
        drop(stdin);
        Ok(child.wait_with_output()?)
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn read_yaml(&self, path: &str) -> Result<serde_yaml::Value> {
        let content = self.read_file(path)?;
        serde_yaml::from_str(&content).with_context(|| format!("Invalid YAML in {}", path))
    }
}

pub fn yaml(content: &str) -> serde_yaml::Value {
    serde_yaml::from_str(content).unwrap()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
