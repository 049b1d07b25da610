//! Export module for the expense tracker
//!
//! Provides complete data export in multiple formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: machine-readable full export with metadata
//! - YAML: human-readable full export with metadata

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, CSV_HEADER};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
