//! Pure aggregation over expense records
//!
//! Each function is a single pass accumulating into an ordered map, so
//! category keys come out alphabetical and period keys chronological.

use std::collections::BTreeMap;

use crate::models::{Expense, Granularity, Money, Period};

/// Sum of amounts per category, only for categories with at least one record
pub fn by_category(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }
    totals
}

/// Sum of amounts per calendar period at the given granularity
pub fn by_period(expenses: &[Expense], granularity: Granularity) -> BTreeMap<Period, Money> {
    let mut totals: BTreeMap<Period, Money> = BTreeMap::new();
    for expense in expenses {
        *totals
            .entry(Period::containing(expense.date, granularity))
            .or_default() += expense.amount;
    }
    totals
}

/// Sum of all amounts (zero for no records)
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Flatten a summary map into `(label, amount)` pairs for charting or display
pub fn to_series<K: ToString>(summary: &BTreeMap<K, Money>) -> Vec<(String, Money)> {
    summary
        .iter()
        .map(|(key, amount)| (key.to_string(), *amount))
        .collect()
}
