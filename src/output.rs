//! CLI output formatting.
//!
//! Renders run reports as styled terminal output: a per-category summary
//! table and an error list truncated for display.

use crate::organizer::OrganizeReport;
use crate::undo::UndoReport;
use colored::*;

/// Maximum number of error lines shown before the `+N more` marker.
const MAX_DISPLAYED_ERRORS: usize = 5;

/// Renders reports and messages for the CLI.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints an informational message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a warning message in yellow.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an error message in red to stderr.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints the summary of an organize run: total processed, counts per
    /// category, and the truncated error list.
    pub fn organize_summary(report: &OrganizeReport, dry_run: bool) {
        let title = if dry_run {
            "ORGANIZE SUMMARY (DRY RUN)"
        } else {
            "ORGANIZE SUMMARY"
        };
        println!("\n{}", title.bold());

        println!("Total files processed: {}", report.total_processed());

        if !report.counts.is_empty() {
            println!("\nFiles by category:");
            let width = report
                .counts
                .keys()
                .map(|name| name.len())
                .max()
                .unwrap_or(0);
            for (category, count) in &report.counts {
                let file_word = if *count == 1 { "file" } else { "files" };
                println!(
                    "  {:<width$}  {} {}",
                    category,
                    count.to_string().green(),
                    file_word,
                    width = width
                );
            }
        }

        Self::error_list(&report.errors);
    }

    /// Prints the summary of an undo run.
    pub fn undo_summary(report: &UndoReport) {
        println!("\n{}", "UNDO SUMMARY".bold());
        println!("Restored {} files to the root directory.", report.restored);
        Self::error_list(&report.errors);
    }

    /// Prints up to [`MAX_DISPLAYED_ERRORS`] errors, then a `+N more`
    /// marker.
    fn error_list(errors: &[String]) {
        if errors.is_empty() {
            return;
        }

        println!("\nErrors encountered: {}", errors.len().to_string().red());
        for error in errors.iter().take(MAX_DISPLAYED_ERRORS) {
            println!("  - {}", error);
        }
        if errors.len() > MAX_DISPLAYED_ERRORS {
            println!("  ... +{} more", errors.len() - MAX_DISPLAYED_ERRORS);
        }
    }
}
