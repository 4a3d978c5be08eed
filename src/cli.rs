//! Command-line front end.
//!
//! Thin glue over the core: parses flags, loads configuration, wires up the
//! console reporter, runs the requested operation and renders its report.
//! Process-level policy lives here: the exit status is non-zero when a run
//! records any per-file error.

use crate::config::Config;
use crate::organizer::{OrganizeOptions, Organizer};
use crate::output::OutputFormatter;
use crate::report::ConsoleReporter;
use crate::undo::UndoManager;
use clap::Parser;
use std::path::PathBuf;

/// Sort the files in a directory into category subfolders by extension.
#[derive(Debug, Parser)]
#[command(name = "sortdir", version)]
pub struct Cli {
    /// Directory to organize (default: the user's Downloads folder).
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Show what would be done without moving any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Undo a previous organization.
    #[arg(long, conflicts_with = "dry_run")]
    pub undo: bool,

    /// Only organize files older than this many days (0 = no filter).
    #[arg(long, value_name = "DAYS", default_value_t = 0)]
    pub age_filter: u32,

    /// Remove category directories left empty after the run.
    #[arg(long)]
    pub auto_clean: bool,

    /// Path to a configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append a timestamped run log to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// The user's Downloads folder, the default organization target.
pub fn default_directory() -> Result<PathBuf, String> {
    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join("Downloads"))
        .map_err(|_| "Could not determine the home directory; pass --directory".to_string())
}

/// Runs the requested operation.
///
/// Returns `Ok(true)` when the run completed without per-file errors,
/// `Ok(false)` when some files failed, and `Err` for fatal conditions
/// (missing directory, broken configuration).
pub fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let directory = match &cli.directory {
        Some(dir) => dir.clone(),
        None => default_directory()?,
    };

    let config = Config::load(cli.config.as_deref())?;
    let organizer = Organizer::new(config.category_table()?, config.compile_filters()?);

    let reporter = ConsoleReporter::new(cli.log_file.clone());
    OutputFormatter::info(&format!("Target directory: {}", directory.display()));

    if cli.undo {
        let report = UndoManager::undo(&directory, organizer.table(), &reporter)?;
        reporter.finish();
        OutputFormatter::undo_summary(&report);
        if !report.is_success() {
            OutputFormatter::warning("Some files could not be restored.");
        }
        return Ok(report.is_success());
    }

    let options = OrganizeOptions {
        dry_run: cli.dry_run,
        age_filter_days: cli.age_filter,
        auto_clean: cli.auto_clean,
    };
    let report = organizer.organize(&directory, &options, &reporter)?;
    reporter.finish();
    OutputFormatter::organize_summary(&report, cli.dry_run);
    if !report.is_success() {
        OutputFormatter::warning("Some files could not be organized.");
    }
    Ok(report.is_success())
}
