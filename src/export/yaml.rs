//! YAML Export functionality
//!
//! Same structure as the JSON export, preceded by a comment header.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::FullExport;
use crate::models::Expense;

/// Export all expenses to YAML format
pub fn export_full_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let export = FullExport::from_expenses(expenses);
    let io_error = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Export").map_err(io_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_error)?;
    writeln!(writer).map_err(io_error)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let expense = Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Groceries",
            Money::from_cents(4599),
            Some("Weekly shop".into()),
        );

        let mut output = Vec::new();
        export_full_yaml(&[expense.clone()], &mut output).unwrap();
        let yaml_string = String::from_utf8(output).unwrap();

        assert!(yaml_string.starts_with("# Expense Tracker Export"));
        assert!(yaml_string.contains("Groceries"));
        assert!(yaml_string.contains("Weekly shop"));

        // Comment lines are ignored by YAML parsers
        let imported: FullExport = serde_yaml::from_str(&yaml_string).unwrap();
        assert_eq!(imported.expenses, vec![expense]);
    }
}
