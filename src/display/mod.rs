//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and summaries for terminal
//! display, including tables and text bar charts.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_table};
pub use report::{format_category_summary, format_period_summary, format_total};
