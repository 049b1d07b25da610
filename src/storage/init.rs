//! First-run helpers
//!
//! Seeds a handful of example expenses so a new user has something to list,
//! summarize and chart.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

use super::expenses::ExpenseStore;

/// (date, category, amount in cents, description)
const SAMPLE_EXPENSES: [((i32, u32, u32), &str, i64, &str); 4] = [
    ((2025, 10, 1), "Food", 20_000, "Breakfast"),
    ((2025, 10, 3), "Transport", 12_000, "Bus ticket"),
    ((2025, 10, 5), "Shopping", 50_000, "Groceries"),
    ((2025, 9, 28), "Bills", 150_000, "Electricity bill"),
];

/// Add the sample expenses when the store is empty
///
/// Returns the number of expenses added; a store that already holds data is
/// left untouched and 0 is returned.
pub fn seed_sample_data(store: &mut ExpenseStore) -> ExpenseResult<usize> {
    if !store.is_empty() {
        return Ok(0);
    }

    for ((year, month, day), category, cents, description) in SAMPLE_EXPENSES {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ExpenseError::Validation(format!("Invalid sample date {}-{}-{}", year, month, day))
        })?;
        store.add(date, category, Money::from_cents(cents), Some(description))?;
    }

    Ok(SAMPLE_EXPENSES.len())
}
