//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense store.

pub mod chart;
pub mod expense;
pub mod export;
pub mod history;
pub mod report;

pub use chart::{handle_chart_command, ChartCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::handle_history_command;
pub use report::{handle_report_command, ReportCommands};
