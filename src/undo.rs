//! Undo: move previously categorized files back to the root directory.
//!
//! No record of the original layout is kept. Undo simply walks every known
//! category directory and moves its files back up, using the shared
//! conflict-safe mover with the `_restored_N` suffix. A file renamed during
//! organize does not recover its pre-organize name if that name is taken
//! again; this lossy-restore policy is accepted.

use crate::category::CategoryTable;
use crate::mover::{self, SuffixStyle};
use crate::organizer::{self, OrganizeError, OrganizeResult};
use crate::report::Reporter;
use std::fs;
use std::path::Path;

/// Outcome of one undo run.
#[derive(Debug, Default)]
pub struct UndoReport {
    /// Number of files moved back to the root directory.
    pub restored: usize,
    /// Per-file error messages, in processing order.
    pub errors: Vec<String>,
}

impl UndoReport {
    /// A run succeeded when no per-file error was recorded.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Reverses a previous organize run for a directory.
pub struct UndoManager;

impl UndoManager {
    /// Moves the files of every existing category directory (including
    /// `Others`) back into `dir`, then removes each category directory iff
    /// it is empty afterward. Removal failures are silently ignored.
    pub fn undo(
        dir: &Path,
        table: &CategoryTable,
        reporter: &dyn Reporter,
    ) -> OrganizeResult<UndoReport> {
        if !dir.exists() {
            return Err(OrganizeError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut report = UndoReport::default();
        for name in table.category_names() {
            let category_path = dir.join(name);
            if !category_path.is_dir() {
                continue;
            }

            Self::restore_directory(&category_path, dir, &mut report, reporter);

            if organizer::directory_is_empty(&category_path) {
                let _ = fs::remove_dir(&category_path);
            }
        }

        Ok(report)
    }

    /// Moves every regular file of one category directory back to the root.
    fn restore_directory(
        category_path: &Path,
        root: &Path,
        report: &mut UndoReport,
        reporter: &dyn Reporter,
    ) {
        let entries = match fs::read_dir(category_path) {
            Ok(entries) => entries,
            Err(e) => {
                report.errors.push(format!(
                    "Error reading {}: {}",
                    category_path.display(),
                    e
                ));
                return;
            }
        };

        for entry in entries.flatten() {
            if let Ok(file_type) = entry.file_type()
                && file_type.is_file()
            {
                let name = entry.file_name().to_string_lossy().to_string();
                match mover::move_into(&entry.path(), root, SuffixStyle::Restored, false) {
                    Ok(_) => {
                        reporter.file_restored(&name);
                        report.restored += 1;
                    }
                    Err(e) => {
                        reporter.file_error(&name, &e.to_string());
                        report
                            .errors
                            .push(format!("Error restoring {}: {}", name, e));
                    }
                }
            }
        }
    }
}
