//! Storage layer for the expense tracker
//!
//! Provides the JSON-backed expense store with atomic writes and automatic
//! directory creation.

pub mod expenses;
pub mod file_io;
pub mod init;

pub use expenses::{ExpenseFilter, ExpenseStore, SortKey};
pub use file_io::{read_json, write_json_atomic};
pub use init::seed_sample_data;

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;

/// Open the store under `paths`, wiring in the audit log when enabled
pub fn open_store(paths: &ExpensePaths, settings: &Settings) -> ExpenseResult<ExpenseStore> {
    paths.ensure_directories()?;

    let store = ExpenseStore::open(paths.data_file())?;
    Ok(if settings.audit_enabled {
        store.with_audit_log(paths.audit_log())
    } else {
        store
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_open_store_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("data"));

        let store = open_store(&paths, &Settings::default()).unwrap();

        assert!(paths.base_dir().exists());
        assert!(store.is_empty());
        assert!(store.audit_logger().is_some());
    }

    #[test]
    fn test_audit_can_be_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };

        let mut store = open_store(&paths, &settings).unwrap();
        store
            .add(
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                "Food",
                Money::from_cents(100),
                None,
            )
            .unwrap();

        assert!(store.audit_logger().is_none());
        assert!(!paths.audit_log().exists());
    }
}
