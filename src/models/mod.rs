//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record, its identifier, money amounts and calendar periods.

pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use expense::{parse_date, Expense, ExpenseUpdate, ExpenseValidationError, DATE_FORMAT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use period::{Granularity, Period};
