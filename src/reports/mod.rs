//! Reports module for the expense tracker
//!
//! Aggregations over expense records: per-category and per-period totals,
//! and a spending breakdown with counts and percentages.

pub mod spending;
pub mod summary;

pub use spending::{SpendingByCategory, SpendingReport};
pub use summary::{by_category, by_period, to_series, total};
