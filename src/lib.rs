//! Expense Tracker - personal expense recording and summaries
//!
//! This library provides the core functionality for the `expenses` command
//! line tool: an authoritative list of expenses persisted to a single JSON
//! file, aggregate summaries by category and calendar period, and SVG charts
//! of those summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, ids, money, periods)
//! - `storage`: The expense store and its JSON file
//! - `reports`: Aggregation and the spending report
//! - `audit`: Audit logging of every mutation
//! - `chart`: SVG bar, line and pie charts
//! - `export`: CSV, JSON and YAML export
//! - `display`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::models::Money;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let mut store = ExpenseStore::open("expenses.json")?;
//! store.add(date, "Food", Money::parse("12.50")?, Some("Lunch"))?;
//! let by_category = store.summarize_by_category();
//! ```

pub mod audit;
pub mod chart;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
