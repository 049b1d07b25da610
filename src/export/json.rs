//! JSON Export functionality
//!
//! Exports every expense plus summary metadata with schema versioning.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::reports::summary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses in insertion order
    pub expenses: Vec<Expense>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    /// Sum of all amounts
    pub total: Money,

    /// Earliest expense date
    pub earliest: Option<NaiveDate>,

    /// Latest expense date
    pub latest: Option<NaiveDate>,
}

impl FullExport {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total: summary::total(expenses),
            earliest: expenses.iter().map(|e| e.date).min(),
            latest: expenses.iter().map(|e| e.date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: expenses.to_vec(),
            metadata,
        }
    }
}

/// Export all expenses to JSON
pub fn export_full_json<W: Write>(
    expenses: &[Expense],
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = FullExport::from_expenses(expenses);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(d: u32, cents: i64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
            "Food",
            Money::from_cents(cents),
            None,
        )
    }

    #[test]
    fn test_metadata() {
        let expenses = vec![expense(20, 500), expense(5, 1250), expense(12, 250)];
        let export = FullExport::from_expenses(&expenses);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.expense_count, 3);
        assert_eq!(export.metadata.total, Money::from_cents(2000));
        assert_eq!(export.metadata.earliest, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(export.metadata.latest, NaiveDate::from_ymd_opt(2024, 1, 20));
    }

    #[test]
    fn test_json_readback() {
        let expenses = vec![expense(5, 1250)];

        let mut output = Vec::new();
        export_full_json(&expenses, &mut output, true).unwrap();

        let imported: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(imported.expenses, expenses);
        assert_eq!(imported.metadata.total, Money::from_cents(1250));
    }

    #[test]
    fn test_empty_export() {
        let export = FullExport::from_expenses(&[]);
        assert_eq!(export.metadata.expense_count, 0);
        assert_eq!(export.metadata.total, Money::zero());
        assert!(export.metadata.earliest.is_none());
    }
}
