//! Discovery of translation documents under the configured search paths.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use glob::glob;
use tracing::warn;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Resolve configured search paths against `base_dir`.
///
/// Literal paths must exist. Glob patterns expand to the directories they
/// match, which may be none.
pub fn resolve_search_paths(base_dir: &Path, paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    for path in paths {
        if is_glob_pattern(path) {
            let full_pattern = base_dir.join(path);
            let pattern_str = full_pattern.to_string_lossy();
            let entries = glob(&pattern_str).map_err(|e| Error::Pattern {
                pattern: path.clone(),
                reason: e.to_string(),
            })?;

            let mut matched: Vec<PathBuf> = entries.flatten().filter(|p| p.is_dir()).collect();
            if matched.is_empty() {
                warn!(pattern = %path, "search path pattern matched no directories");
            }
            matched.sort();
            dirs.extend(matched);
        } else {
            let dir = base_dir.join(path);
            if !dir.exists() {
                return Err(Error::SearchPathNotFound(dir));
            }
            dirs.push(dir);
        }
    }

    Ok(dirs)
}

/// Find every YAML document below `dirs`, recursively.
///
/// Files come back grouped by search path and sorted by name within each
/// directory. A file reachable from two search paths is returned once.
pub fn scan_translation_files(dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut files = Vec::new();

    for dir in dirs {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_file()
                && is_translation_file(path)
                && seen.insert(path.to_path_buf())
            {
                files.push(path.to_path_buf());
            }
        }
    }

    Ok(files)
}

fn is_translation_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml" | "yaml")
    )
}
