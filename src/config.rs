//! TOML configuration for the category table and file exclusion rules.
//!
//! The classifier ships with a built-in table, but both the table and the
//! set of files the scanner is willing to touch can be overridden from a
//! configuration file:
//!
//! ```toml
//! [categories]
//! Documents = ["pdf", "txt", "md"]
//! Raw = ["cr2", "nef"]
//!
//! [exclude]
//! filenames = ["Thumbs.db"]
//! extensions = ["part", "crdownload"]
//! patterns = ["*.tmp"]
//! regex = ['^~\$.*']
//! ```
//!
//! When `[categories]` is present it replaces the default table entirely.
//! Hidden files (names starting with `.` or `~`) are always skipped and
//! need no rule.

use crate::category::{Category, CategoryTable};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading or compiling configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found at the explicitly requested path.
    ConfigNotFound(PathBuf),
    /// Invalid TOML syntax or structure.
    ConfigInvalid(String),
    /// Invalid glob pattern in an exclude rule.
    InvalidGlobPattern(String),
    /// Invalid regex pattern in an exclude rule, with the compile error.
    InvalidRegexPattern { pattern: String, reason: String },
    /// IO error while reading the configuration file.
    IoError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigNotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::ConfigInvalid(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::InvalidGlobPattern(pattern) => {
                write!(f, "Invalid glob pattern '{}'", pattern)
            }
            ConfigError::InvalidRegexPattern { pattern, reason } => {
                write!(f, "Invalid regex pattern '{}': {}", pattern, reason)
            }
            ConfigError::IoError(msg) => write!(f, "IO error reading configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// On-disk configuration: optional category overrides plus exclusion rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Category name to extension list. Replaces the default table when set.
    #[serde(default)]
    pub categories: Option<toml::map::Map<String, toml::Value>>,

    /// Rules for files the scanner should leave alone.
    #[serde(default)]
    pub exclude: ExcludeRules,
}

/// Rules for excluding files from a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExcludeRules {
    /// Exact filenames (e.g., "Thumbs.db").
    #[serde(default)]
    pub filenames: Vec<String>,

    /// Extensions, matched case-insensitively without the dot.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Glob patterns matched against the file name.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Regex patterns matched against the file name.
    #[serde(default)]
    pub regex: Vec<String>,
}

impl Config {
    /// Loads configuration, falling back through the usual locations.
    ///
    /// Order: the explicit `config_path` if given, then `.sortdir.toml` in
    /// the current directory, then `$HOME/.config/sortdir/config.toml`,
    /// then built-in defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local_config = PathBuf::from(".sortdir.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Ok(home) = std::env::var("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sortdir")
                .join("config.toml");
            if home_config.exists() {
                return Self::load_from_file(&home_config);
            }
        }

        Ok(Self::default())
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ConfigInvalid(e.to_string()))
    }

    /// Builds the category table: the `[categories]` override when present,
    /// the default table otherwise.
    pub fn category_table(&self) -> Result<CategoryTable, ConfigError> {
        let Some(overrides) = &self.categories else {
            return Ok(CategoryTable::default());
        };

        let mut categories = Vec::new();
        for (name, value) in overrides {
            let extensions = value
                .as_array()
                .ok_or_else(|| {
                    ConfigError::ConfigInvalid(format!(
                        "category '{}' must be a list of extensions",
                        name
                    ))
                })?
                .iter()
                .map(|v| {
                    v.as_str().ok_or_else(|| {
                        ConfigError::ConfigInvalid(format!(
                            "category '{}' contains a non-string extension",
                            name
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            categories.push(Category::new(name, &extensions));
        }
        Ok(CategoryTable::new(categories))
    }

    /// Pre-compiles the exclusion rules for matching during a scan.
    pub fn compile_filters(&self) -> Result<CompiledFilters, ConfigError> {
        CompiledFilters::new(&self.exclude)
    }
}

/// Exclusion rules compiled into matchable form.
///
/// Glob and regex patterns are compiled once here so the scanner does not
/// reparse them per file.
#[derive(Default)]
pub struct CompiledFilters {
    filenames: HashSet<String>,
    extensions: HashSet<String>,
    patterns: Vec<Pattern>,
    regexes: Vec<Regex>,
}

impl CompiledFilters {
    fn new(rules: &ExcludeRules) -> Result<Self, ConfigError> {
        let patterns = rules
            .patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|_| ConfigError::InvalidGlobPattern(pattern.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let regexes = rules
            .regex
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ConfigError::InvalidRegexPattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            filenames: rules.filenames.iter().cloned().collect(),
            extensions: rules
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
            patterns,
            regexes,
        })
    }

    /// Returns true when no exclusion rule matches the file name.
    ///
    /// Hidden-file skipping is the scanner's job, not a rule here.
    pub fn should_include(&self, file_name: &str) -> bool {
        if self.filenames.contains(file_name) {
            return false;
        }

        if let Some(ext) = Path::new(file_name).extension() {
            let ext_lower = ext.to_string_lossy().to_lowercase();
            if self.extensions.contains(&ext_lower) {
                return false;
            }
        }

        if self
            .patterns
            .iter()
            .any(|pattern| pattern.matches(file_name))
        {
            return false;
        }

        if self.regexes.iter().any(|regex| regex.is_match(file_name)) {
            return false;
        }

        true
    }
}
