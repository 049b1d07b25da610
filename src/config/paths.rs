//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. Explicit override (the `--data-dir` flag)
//! 2. `EXPENSE_TRACKER_DATA_DIR` environment variable
//! 3. Platform config directory + `expense-tracker`
//!    (`~/.config/expense-tracker` on Linux, `%APPDATA%\expense-tracker` on Windows)

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{ExpenseError, ExpenseResult};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

const APP_DIR_NAME: &str = "expense-tracker";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns a config error if no override is given and the platform
    /// config directory cannot be determined.
    pub fn new(override_dir: Option<PathBuf>) -> ExpenseResult<Self> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => match std::env::var_os(DATA_DIR_ENV) {
                Some(custom) if !custom.is_empty() => PathBuf::from(custom),
                _ => resolve_default_path()?,
            },
        };

        Ok(Self { base_dir })
    }

    /// Use a fixed base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path to expenses.json
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Default output directory for charts
    pub fn charts_dir(&self) -> PathBuf {
        self.base_dir.join("charts")
    }

    /// Create the base directory if it does not exist
    pub fn ensure_directories(&self) -> ExpenseResult<()> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }
}

fn resolve_default_path() -> ExpenseResult<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join(APP_DIR_NAME))
        .ok_or_else(|| {
            ExpenseError::Config(format!(
                "Could not determine a config directory; set {} or pass --data-dir",
                DATA_DIR_ENV
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_file(), temp_dir.path().join("expenses.json"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(paths.charts_dir(), temp_dir.path().join("charts"));
    }

    #[test]
    fn test_explicit_override_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::new(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("nested").join("data"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
