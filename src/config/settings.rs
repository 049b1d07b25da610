//! User settings for the expense tracker
//!
//! Stored as config.json next to the expenses file. Every field has a default
//! so older or hand-edited files keep loading.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::DATE_FORMAT;
use crate::storage::file_io::write_json_atomic;
use crate::storage::SortKey;

/// SVG chart dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(default = "default_chart_width")]
    pub width: u32,
    #[serde(default = "default_chart_height")]
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for terminal output (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Order used by `list` when no --sort is given
    #[serde(default)]
    pub default_sort: SortKey,

    /// Whether mutations are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Log filter used when EXPENSES_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub chart: ChartSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_chart_width() -> u32 {
    800
}

fn default_chart_height() -> u32 {
    500
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_sort: SortKey::default(),
            audit_enabled: default_audit_enabled(),
            log_level: default_log_level(),
            chart: ChartSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> ExpenseResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.check_date_format()?;
        Ok(settings)
    }

    /// Reject a date_format chrono cannot render for a plain date
    pub fn check_date_format(&self) -> ExpenseResult<()> {
        match render_date(NaiveDate::MIN, &self.date_format) {
            Some(_) => Ok(()),
            None => Err(ExpenseError::Config(format!(
                "Invalid date_format '{}': expected a strftime date format such as '{}'",
                self.date_format, DATE_FORMAT
            ))),
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> ExpenseResult<()> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Format a date for terminal output
    ///
    /// Falls back to ISO dates if date_format cannot be rendered.
    pub fn format_date(&self, date: NaiveDate) -> String {
        render_date(date, &self.date_format)
            .unwrap_or_else(|| date.format(DATE_FORMAT).to_string())
    }
}

fn render_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_sort, SortKey::Insertion);
        assert!(settings.audit_enabled);
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.chart.width, 800);
        assert_eq!(settings.chart.height, 500);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            default_sort: SortKey::Date,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.default_sort, SortKey::Date);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"default_sort": "date", "chart": {"width": 1024}}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_sort, SortKey::Date);
        assert_eq!(loaded.chart.width, 1024);
        assert_eq!(loaded.chart.height, 500);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_unrenderable_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        for format in ["%H:%M", "%Q"] {
            std::fs::write(
                paths.settings_file(),
                format!(r#"{{"date_format": "{}"}}"#, format),
            )
            .unwrap();
            let err = Settings::load_or_create(&paths).unwrap_err();
            assert!(matches!(err, ExpenseError::Config(_)));
        }
    }

    #[test]
    fn test_format_date_falls_back_to_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let settings = Settings {
            date_format: "%H:%M".into(),
            ..Settings::default()
        };
        assert_eq!(settings.format_date(date), "2024-01-05");

        let settings = Settings {
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        assert!(settings.check_date_format().is_ok());
        assert_eq!(settings.format_date(date), "05/01/2024");
    }
}
