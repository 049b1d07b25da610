//! Report CLI commands
//!
//! Summaries by category, by period, the grand total and the spending report.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_summary, format_period_summary, format_total};
use crate::error::ExpenseResult;
use crate::models::{Granularity, Money};
use crate::storage::ExpenseStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total spending per category
    Category {
        /// Only report this category (case-insensitive)
        #[arg(short, long)]
        name: Option<String>,
        /// Draw a bar next to each row
        #[arg(short, long)]
        bars: bool,
    },
    /// Total spending per day or month
    Period {
        /// day or month
        #[arg(short, long, default_value_t = Granularity::Month)]
        granularity: Granularity,
        /// Draw a bar next to each row
        #[arg(short, long)]
        bars: bool,
    },
    /// Total of all expenses
    Total,
    /// Per-category totals with counts and shares
    Spending {
        /// Only show the N largest categories
        #[arg(short, long)]
        top: Option<usize>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    match cmd {
        ReportCommands::Category { name: Some(name), .. } => {
            let total: Money = store
                .expenses()
                .iter()
                .filter(|e| e.category.eq_ignore_ascii_case(name.trim()))
                .map(|e| e.amount)
                .sum();
            println!(
                "Total spent on '{}': {}",
                name.trim(),
                total.format_with_symbol(&settings.currency_symbol)
            );
        }

        ReportCommands::Category { name: None, bars } => {
            let totals = store.summarize_by_category();
            print!("{}", format_category_summary(&totals, settings, bars));
        }

        ReportCommands::Period { granularity, bars } => {
            let totals = store.summarize_by_period(granularity);
            print!("{}", format_period_summary(&totals, settings, bars));
        }

        ReportCommands::Total => {
            print!("{}", format_total(store.total(), store.len(), settings));
        }

        ReportCommands::Spending { top } => {
            let mut report = store.spending_report();
            if let Some(limit) = top {
                report.categories = report.top_categories(limit).to_vec();
            }
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }
    }

    Ok(())
}
