//! Persisted settings for the GUI front end.
//!
//! A flat record (last used folder, auto-clean flag, age filter in days)
//! stored as TOML. Read once at startup, written back after each
//! user-triggered action; last writer wins. No schema versioning.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// User-facing settings persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The folder last organized. Empty until a folder is chosen.
    pub last_folder: String,
    /// Remove category directories left empty after a run.
    pub auto_clean: bool,
    /// Age filter threshold in days; zero disables filtering.
    pub age_filter: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_folder: String::new(),
            auto_clean: true,
            age_filter: 0,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, returning defaults when the file does
    /// not exist (first run). A present-but-unreadable file is an error.
    pub fn load(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Writes settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)
    }
}
