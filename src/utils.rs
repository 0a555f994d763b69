//! Common utility functions shared across the codebase.

use std::{fs, io::Write, path::Path};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Replace `path` with `content` in one step.
///
/// The content goes to a temporary file next to the target first, which is
/// then renamed over it. If anything fails the old file stays as it was.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_error)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(content.as_bytes()).map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// `"file"` or `"files"`.
pub fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
