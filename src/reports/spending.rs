//! Spending Report
//!
//! Generates spending analysis by category, with record counts and each
//! category's share of overall spending.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::display::report::format_percentage;
use crate::models::{Expense, Money};

/// Spending breakdown for one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    pub category: String,
    pub total_spending: Money,
    /// Number of expenses in this category
    pub expense_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Categories, most spending first
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_expenses: usize,
    /// Earliest expense date covered
    pub start_date: Option<NaiveDate>,
    /// Latest expense date covered
    pub end_date: Option<NaiveDate>,
}

impl SpendingReport {
    /// Generate a spending report over the given expenses
    pub fn generate(expenses: &[Expense]) -> Self {
        let mut per_category: BTreeMap<&str, (Money, usize)> = BTreeMap::new();
        for expense in expenses {
            let entry = per_category
                .entry(expense.category.as_str())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let total_spending: Money = expenses.iter().map(|e| e.amount).sum();

        let mut categories: Vec<SpendingByCategory> = per_category
            .into_iter()
            .map(|(category, (spending, count))| SpendingByCategory {
                category: category.to_string(),
                total_spending: spending,
                expense_count: count,
                percentage: share(spending, total_spending),
            })
            .collect();

        // Most spending first; ties stay alphabetical
        categories.sort_by(|a, b| b.total_spending.cmp(&a.total_spending));

        Self {
            categories,
            total_spending,
            total_expenses: expenses.len(),
            start_date: expenses.iter().map(|e| e.date).min(),
            end_date: expenses.iter().map(|e| e.date).max(),
        }
    }

    /// Get top spending categories
    pub fn top_categories(&self, limit: usize) -> &[SpendingByCategory] {
        &self.categories[..limit.min(self.categories.len())]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => {
                output.push_str(&format!("Spending Report: {} to {}\n", start, end))
            }
            _ => output.push_str("Spending Report\n"),
        }
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<32} {:>14} {:>8} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<32} {:>14} {:>8} {:>7}\n",
                row.category,
                row.total_spending.format_with_symbol(currency_symbol),
                row.expense_count,
                format_percentage(row.percentage)
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<32} {:>14} {:>8}\n",
            "TOTAL",
            self.total_spending.format_with_symbol(currency_symbol),
            self.total_expenses
        ));

        output
    }
}

fn share(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(d: u32, category: &str, cents: i64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2025, 1, d).unwrap(),
            category,
            Money::from_cents(cents),
            None,
        )
    }

    #[test]
    fn test_generate_spending_report() {
        let expenses = vec![
            expense(10, "Groceries", 5000),
            expense(15, "Dining Out", 3000),
            expense(20, "Groceries", 2000),
        ];

        let report = SpendingReport::generate(&expenses);

        assert_eq!(report.total_spending.cents(), 10000);
        assert_eq!(report.total_expenses, 3);
        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.categories[0].category, "Groceries");
        assert_eq!(report.categories[0].expense_count, 2);
        assert!((report.categories[0].percentage - 70.0).abs() < 1e-9);
        assert_eq!(report.start_date, NaiveDate::from_ymd_opt(2025, 1, 10));
        assert_eq!(report.end_date, NaiveDate::from_ymd_opt(2025, 1, 20));
    }

    #[test]
    fn test_ties_are_alphabetical() {
        let expenses = vec![expense(1, "Transport", 2000), expense(2, "Food", 2000)];
        let report = SpendingReport::generate(&expenses);
        assert_eq!(report.categories[0].category, "Food");
        assert_eq!(report.top_categories(1).len(), 1);
        assert_eq!(report.top_categories(10).len(), 2);
    }

    #[test]
    fn test_zero_total_has_zero_share() {
        let report = SpendingReport::generate(&[expense(1, "Free", 0)]);
        assert_eq!(report.categories[0].percentage, 0.0);
    }

    #[test]
    fn test_format_terminal() {
        let report = SpendingReport::generate(&[expense(1, "Food", 1250)]);
        let output = report.format_terminal("$");
        assert!(output.contains("Spending Report: 2025-01-01 to 2025-01-01"));
        assert!(output.contains("Food"));
        assert!(output.contains("$12.50"));

        let empty = SpendingReport::generate(&[]).format_terminal("$");
        assert!(empty.contains("No expenses recorded."));
    }
}
