//! Per-event reporting for organize and undo runs.
//!
//! The core operations do not own a log destination. They emit events
//! through a [`Reporter`] passed in by the caller, which keeps them pure
//! functions of (directory, options) -> report and lets the CLI, a GUI, or
//! a test decide where output goes.

use chrono::Local;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Severity of a reported event, mirrored into the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

/// Receives progress events from organize and undo runs.
///
/// All methods default to no-ops so implementations only handle what they
/// care about.
pub trait Reporter {
    /// A category directory was created.
    fn directory_created(&self, name: &str) {
        let _ = name;
    }

    /// A file was moved into a category directory.
    fn file_moved(&self, file_name: &str, category: &str) {
        let _ = (file_name, category);
    }

    /// Dry-run: a file would be moved into a category directory.
    fn would_move(&self, file_name: &str, category: &str) {
        let _ = (file_name, category);
    }

    /// A file was moved back to the root directory during undo.
    fn file_restored(&self, file_name: &str) {
        let _ = file_name;
    }

    /// Processing one file failed; the run continues.
    fn file_error(&self, file_name: &str, reason: &str) {
        let _ = (file_name, reason);
    }

    /// Free-form informational note.
    fn note(&self, message: &str) {
        let _ = message;
    }
}

/// A reporter that discards everything. Useful for tests and embedding.
pub struct NullReporter;

impl Reporter for NullReporter {}

/// CLI reporter: a spinner with per-file lines on standard streams, plus an
/// optional append-only log file with timestamped, severity-tagged lines.
pub struct ConsoleReporter {
    log_file: Option<PathBuf>,
    progress: ProgressBar,
}

impl ConsoleReporter {
    /// Creates a reporter. When `log_file` is set, every event is also
    /// appended there as `YYYY-MM-DD HH:MM:SS - LEVEL - message`.
    pub fn new(log_file: Option<PathBuf>) -> Self {
        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {pos} processed")
                .expect("Invalid progress template"),
        );
        progress.enable_steady_tick(Duration::from_millis(100));
        Self { log_file, progress }
    }

    /// Stops and clears the spinner. Call before printing the summary.
    pub fn finish(&self) {
        self.progress.finish_and_clear();
    }

    fn log(&self, severity: Severity, message: &str) {
        let Some(path) = &self.log_file else {
            return;
        };
        let line = format!(
            "{} - {} - {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            severity.label(),
            message
        );
        // A failing log sink must not fail the run.
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

impl Reporter for ConsoleReporter {
    fn directory_created(&self, name: &str) {
        self.progress
            .println(format!("{} Created directory: {}", "+".green(), name));
        self.log(Severity::Info, &format!("Created directory: {}", name));
    }

    fn file_moved(&self, file_name: &str, category: &str) {
        self.progress
            .println(format!("{} {} -> {}/", "✓".green(), file_name, category.cyan()));
        self.progress.inc(1);
        self.log(
            Severity::Info,
            &format!("Moved: {} -> {}/", file_name, category),
        );
    }

    fn would_move(&self, file_name: &str, category: &str) {
        self.progress.println(format!(
            "{} {} -> {}/",
            "[DRY RUN]".yellow(),
            file_name,
            category.cyan()
        ));
        self.progress.inc(1);
        self.log(
            Severity::Info,
            &format!("[DRY RUN] Would move: {} -> {}/", file_name, category),
        );
    }

    fn file_restored(&self, file_name: &str) {
        self.progress
            .println(format!("{} Restored: {}", "✓".green(), file_name));
        self.progress.inc(1);
        self.log(Severity::Info, &format!("Restored: {}", file_name));
    }

    fn file_error(&self, file_name: &str, reason: &str) {
        self.progress
            .println(format!("{} {}: {}", "✗".red(), file_name, reason));
        self.log(
            Severity::Error,
            &format!("Error processing {}: {}", file_name, reason),
        );
    }

    fn note(&self, message: &str) {
        self.progress.println(message.cyan().to_string());
        self.log(Severity::Info, message);
    }
}
