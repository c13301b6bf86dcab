//! Where pinkink keeps its files.
//!
//! Everything lives under one root, `$PINKINK_HOME` or `~/.pinkink/`:
//! - `config.yaml` - settings
//! - `pinkink.db` - entries, goals, and prompt responses
//! - `exports/` - dated snapshots written by `pinkink export --save`

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::JournalError;

/// Overrides the data root.
pub const HOME_ENV: &str = "PINKINK_HOME";

/// Resolved file locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub database: PathBuf,
    pub exports: PathBuf,
}

impl Paths {
    /// Resolve the root from `PINKINK_HOME`, falling back to `~/.pinkink`.
    ///
    /// # Errors
    ///
    /// Returns `Config` when neither `PINKINK_HOME` nor `HOME` is set.
    pub fn new() -> Result<Self, JournalError> {
        Self::resolve(std::env::var_os(HOME_ENV), std::env::var_os("HOME"))
    }

    fn resolve(
        pinkink_home: Option<std::ffi::OsString>,
        home: Option<std::ffi::OsString>,
    ) -> Result<Self, JournalError> {
        let non_empty = |v: &std::ffi::OsString| !v.is_empty();

        if let Some(root) = pinkink_home.filter(non_empty) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }
        home.filter(non_empty)
            .map(|home| Self::with_root(PathBuf::from(home).join(".pinkink")))
            .ok_or_else(|| {
                JournalError::Config(format!(
                    "Could not determine home directory (set HOME or {HOME_ENV})"
                ))
            })
    }

    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("pinkink.db"),
            exports: root.join("exports"),
            root,
        }
    }

    /// Snapshot file for an export taken on `date`.
    #[must_use]
    pub fn export_file(&self, date: NaiveDate) -> PathBuf {
        self.exports.join(format!("pinkink-{}.json", date.format("%Y-%m-%d")))
    }

    /// Create the root and exports directories if missing.
    ///
    /// # Errors
    ///
    /// Returns `Config` if a directory cannot be created.
    pub fn ensure_dirs(&self) -> Result<(), JournalError> {
        for dir in [&self.root, &self.exports] {
            std::fs::create_dir_all(dir).map_err(|e| {
                JournalError::Config(format!("Failed to create directory {}: {e}", dir.display()))
            })?;
        }
        Ok(())
    }
}
