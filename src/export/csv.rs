//! CSV export of expense records

use std::io::Write;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

/// Column names, written even when there are no expenses
pub const CSV_HEADER: [&str; 5] = ["id", "date", "category", "amount", "description"];

#[derive(Serialize)]
struct CsvRow<'a> {
    id: String,
    date: String,
    category: &'a str,
    amount: Money,
    description: &'a str,
}

impl<'a> From<&'a Expense> for CsvRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.as_uuid().to_string(),
            date: expense.date.to_string(),
            category: &expense.category,
            amount: expense.amount,
            description: expense.description_or_empty(),
        }
    }
}

/// Write expenses to CSV, in the order given
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER).map_err(export_error)?;
    for expense in expenses {
        csv_writer
            .serialize(CsvRow::from(expense))
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

fn export_error(e: ::csv::Error) -> ExpenseError {
    ExpenseError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_header_only_for_empty() {
        let mut output = Vec::new();
        export_expenses_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,date,category,amount,description\n"
        );
    }

    #[test]
    fn test_rows_are_quoted_when_needed() {
        let expense = Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Food",
            Money::from_cents(1250),
            Some("Lunch, with \"friends\"".into()),
        );

        let mut output = Vec::new();
        export_expenses_csv(&[expense.clone()], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let line = text.lines().nth(1).unwrap();

        assert_eq!(
            line,
            format!(
                "{},2024-01-05,Food,12.50,\"Lunch, with \"\"friends\"\"\"",
                expense.id.as_uuid()
            )
        );
    }
}
