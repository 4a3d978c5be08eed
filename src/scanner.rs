//! Non-recursive directory scanning.
//!
//! Produces a single point-in-time snapshot of the regular files directly
//! inside a directory. Subdirectories are never descended into, and hidden
//! or system files (names starting with `.` or `~`) are always skipped,
//! along with anything the configured exclusion rules match.

use crate::config::CompiledFilters;
use crate::organizer::{OrganizeError, OrganizeResult};
use std::fs;
use std::path::{Path, PathBuf};

/// A regular file found during a scan.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Base file name.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
}

/// Returns true for hidden/system names that are never organized.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('~')
}

/// Lists the eligible regular files directly inside `dir`.
///
/// Fails with [`OrganizeError::DirectoryNotFound`] when the directory is
/// missing. Entries whose type cannot be determined are skipped rather than
/// failing the scan.
pub fn scan_directory(dir: &Path, filters: &CompiledFilters) -> OrganizeResult<Vec<FileEntry>> {
    if !dir.exists() {
        return Err(OrganizeError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|e| OrganizeError::ReadDirFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        if let Ok(file_type) = entry.file_type()
            && file_type.is_file()
        {
            let name = entry.file_name().to_string_lossy().to_string();
            if is_hidden(&name) || !filters.should_include(&name) {
                continue;
            }
            files.push(FileEntry {
                name,
                path: entry.path(),
            });
        }
    }

    // Directory iteration order is filesystem-dependent; sort for
    // deterministic processing and summaries.
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
