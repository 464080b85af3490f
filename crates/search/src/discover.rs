//! Directory enumeration
//!
//! Only direct children are considered. Enumeration order does not matter:
//! the indexer sorts its input.

use std::fs;
use std::path::Path;
use textsearch_core::{Error, FilePath, Result};
use tracing::debug;

/// List the files directly inside `dir` whose name ends with `extension`.
///
/// Returned paths are `dir` joined with the entry name. Entries that are
/// not regular files (after following symlinks) are skipped.
///
/// # Errors
///
/// `Error::DirectoryNotFound` if `dir` does not exist, `Error::Io` if it
/// cannot be listed.
pub fn text_files_in_dir(dir: &Path, extension: &str) -> Result<Vec<FilePath>> {
    if !dir.exists() {
        return Err(Error::DirectoryNotFound(dir.to_path_buf()));
    }

    let dir_name = dir.display().to_string();
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir_name.as_str(), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir_name.as_str(), e))?;
        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(extension) {
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            debug!(target: "textsearch::discover", path = %path.display(), "Skipping non-file entry");
            continue;
        }
        files.push(FilePath::from_path(&path));
    }

    debug!(target: "textsearch::discover", dir = %dir_name, count = files.len(), "Directory scanned");
    Ok(files)
}
