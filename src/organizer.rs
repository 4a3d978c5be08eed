//! The organize operation: classify files and move them into category
//! subdirectories.
//!
//! A single straight-line pass with no retries and no rollback. The only
//! fatal condition is a missing source directory; everything that goes
//! wrong for an individual file is recorded in the report and the batch
//! carries on.

use crate::category::CategoryTable;
use crate::config::CompiledFilters;
use crate::mover::{self, SuffixStyle};
use crate::report::Reporter;
use crate::scanner::{self, FileEntry};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Fatal errors for organize and undo runs.
///
/// Per-file failures are not represented here; they are collected as
/// message strings in the run report.
#[derive(Debug)]
pub enum OrganizeError {
    /// The source directory does not exist. Nothing was touched.
    DirectoryNotFound { path: PathBuf },
    /// The source directory could not be read.
    ReadDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryNotFound { path } => {
                write!(f, "Directory does not exist: {}", path.display())
            }
            Self::ReadDirFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryNotFound { .. } => None,
            Self::ReadDirFailed { source, .. } => Some(source),
        }
    }
}

/// Result type for organize and undo operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Options for one organize run.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizeOptions {
    /// Report intended moves without touching the filesystem.
    pub dry_run: bool,
    /// Only organize files whose mtime is strictly older than this many
    /// days. Zero disables the filter.
    pub age_filter_days: u32,
    /// Remove category directories left empty after the run.
    pub auto_clean: bool,
}

/// Outcome of one organize run. Not persisted.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    /// Files per category, including intended moves in dry-run mode.
    pub counts: BTreeMap<String, usize>,
    /// (file name, destination category) pairs for files actually moved.
    pub moved: Vec<(String, String)>,
    /// Per-file error messages, in processing order.
    pub errors: Vec<String>,
}

impl OrganizeReport {
    /// Total number of files processed (moved or counted in dry-run).
    pub fn total_processed(&self) -> usize {
        self.counts.values().sum()
    }

    /// A run succeeded when no per-file error was recorded.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Classifies and relocates the files of a directory.
///
/// Holds only the immutable category table and compiled exclusion filters;
/// each run is a pure function of the directory contents and the options.
pub struct Organizer {
    table: CategoryTable,
    filters: CompiledFilters,
}

impl Organizer {
    pub fn new(table: CategoryTable, filters: CompiledFilters) -> Self {
        Self { table, filters }
    }

    /// The category table this organizer classifies with.
    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Organizes the regular files directly inside `dir` into category
    /// subdirectories.
    ///
    /// In dry-run mode the filesystem is left untouched and the report
    /// carries the intended destinations instead.
    pub fn organize(
        &self,
        dir: &Path,
        options: &OrganizeOptions,
        reporter: &dyn Reporter,
    ) -> OrganizeResult<OrganizeReport> {
        let mut report = OrganizeReport::default();
        let files = scanner::scan_directory(dir, &self.filters)?;

        if files.is_empty() {
            reporter.note("No files found to organize.");
            return Ok(report);
        }

        let files = self.apply_age_filter(files, options.age_filter_days, &mut report, reporter);
        if files.is_empty() {
            return Ok(report);
        }

        if !options.dry_run {
            self.create_category_directories(dir, &mut report, reporter);
        }

        for entry in &files {
            let category = self.classify_entry(entry);

            if options.dry_run {
                reporter.would_move(&entry.name, category);
                *report.counts.entry(category.to_string()).or_insert(0) += 1;
                continue;
            }

            match mover::move_into(&entry.path, &dir.join(category), SuffixStyle::Numbered, true) {
                Ok(_) => {
                    reporter.file_moved(&entry.name, category);
                    report.moved.push((entry.name.clone(), category.to_string()));
                    *report.counts.entry(category.to_string()).or_insert(0) += 1;
                }
                Err(e) => {
                    reporter.file_error(&entry.name, &e.to_string());
                    report
                        .errors
                        .push(format!("Error processing {}: {}", entry.name, e));
                }
            }
        }

        if options.auto_clean && !options.dry_run {
            self.remove_empty_category_directories(dir);
        }

        Ok(report)
    }

    /// Returns the category for a scanned file, by extension.
    fn classify_entry(&self, entry: &FileEntry) -> &str {
        let ext = entry
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        self.table.classify(&ext)
    }

    /// Drops files newer than the cutoff. A threshold of zero keeps
    /// everything; a file modified exactly at the cutoff does not qualify.
    fn apply_age_filter(
        &self,
        files: Vec<FileEntry>,
        age_filter_days: u32,
        report: &mut OrganizeReport,
        reporter: &dyn Reporter,
    ) -> Vec<FileEntry> {
        if age_filter_days == 0 {
            return files;
        }

        let cutoff = Utc::now() - Duration::days(i64::from(age_filter_days));
        files
            .into_iter()
            .filter(|entry| match modified_time(&entry.path) {
                Ok(modified) => modified < cutoff,
                Err(e) => {
                    reporter.file_error(&entry.name, &e.to_string());
                    report
                        .errors
                        .push(format!("Error processing {}: {}", entry.name, e));
                    false
                }
            })
            .collect()
    }

    /// Pre-creates one subdirectory per category, plus `Others`. Creation
    /// failures are recorded but do not stop the run; the mover will retry
    /// on demand.
    fn create_category_directories(
        &self,
        dir: &Path,
        report: &mut OrganizeReport,
        reporter: &dyn Reporter,
    ) {
        for name in self.table.category_names() {
            let category_path = dir.join(name);
            if category_path.exists() {
                continue;
            }
            match fs::create_dir(&category_path) {
                Ok(()) => reporter.directory_created(name),
                Err(e) => {
                    reporter.file_error(name, &e.to_string());
                    report
                        .errors
                        .push(format!("Error creating directory {}: {}", name, e));
                }
            }
        }
    }

    /// Removes category directories that ended up empty. Failures are
    /// silently ignored.
    fn remove_empty_category_directories(&self, dir: &Path) {
        for name in self.table.category_names() {
            let category_path = dir.join(name);
            if directory_is_empty(&category_path) {
                let _ = fs::remove_dir(&category_path);
            }
        }
    }
}

/// Last-modified time of a file as UTC.
fn modified_time(path: &Path) -> std::io::Result<DateTime<Utc>> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified))
}

/// True only for an existing, readable, empty directory.
pub(crate) fn directory_is_empty(path: &Path) -> bool {
    fs::read_dir(path)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
