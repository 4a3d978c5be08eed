//! sortdir - sort the files of a directory into category subfolders.
//!
//! This library classifies files by extension, moves them into category
//! subdirectories without ever overwriting anything, and can undo a
//! previous run. It supports dry-run previews, age-based filtering, and an
//! overridable category table via TOML configuration.

pub mod category;
pub mod cli;
pub mod config;
pub mod mover;
pub mod organizer;
pub mod output;
pub mod report;
pub mod scanner;
pub mod settings;
pub mod undo;

pub use category::{Category, CategoryTable, OTHERS};
pub use config::{CompiledFilters, Config, ConfigError};
pub use organizer::{OrganizeError, OrganizeOptions, OrganizeReport, OrganizeResult, Organizer};
pub use report::{ConsoleReporter, NullReporter, Reporter};
pub use settings::Settings;
pub use undo::{UndoManager, UndoReport};
