//! Expense CLI commands
//!
//! Implements add, list, show, edit and delete.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_date, ExpenseUpdate, Money};
use crate::storage::{ExpenseFilter, ExpenseStore, SortKey};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50" or "$1,200")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Order: insertion or date (defaults to the configured sort)
        #[arg(short, long)]
        sort: Option<SortKey>,
        /// Only this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID (full UUID or exp- prefix)
        id: String,
    },
    /// Edit an expense
    Edit {
        /// Expense ID (full UUID or exp- prefix)
        id: String,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New description
        #[arg(short = 'm', long, conflicts_with = "clear_description")]
        description: Option<String>,
        /// Remove the description
        #[arg(long)]
        clear_description: bool,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (full UUID or exp- prefix)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date_str) => parse_cli_date(&date_str)?,
                None => chrono::Local::now().date_naive(),
            };

            let expense = store.add(date, &category, amount, description.as_deref())?;

            println!("Added expense:");
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::List {
            sort,
            category,
            from,
            to,
            limit,
        } => {
            let filter = ExpenseFilter {
                category,
                start_date: from.as_deref().map(parse_cli_date).transpose()?,
                end_date: to.as_deref().map(parse_cli_date).transpose()?,
                limit,
            };

            let expenses =
                store.list_filtered(sort.unwrap_or(settings.default_sort), &filter);
            print!("{}", format_expense_table(&expenses, settings));
        }

        ExpenseCommands::Show { id } => {
            let expense = store.find(&id)?;
            print!("{}", format_expense_details(expense, settings));
        }

        ExpenseCommands::Edit {
            id,
            date,
            category,
            amount,
            description,
            clear_description,
        } => {
            let mut update = ExpenseUpdate::new();
            if let Some(date_str) = date {
                update = update.date(parse_cli_date(&date_str)?);
            }
            if let Some(category) = category {
                update = update.category(category);
            }
            if let Some(amount_str) = amount {
                update = update.amount(parse_amount(&amount_str)?);
            }
            if clear_description {
                update = update.description(None);
            } else if let Some(description) = description {
                update = update.description(Some(description));
            }

            if update.is_empty() {
                return Err(ExpenseError::Validation(
                    "Nothing to change: provide at least one of --date, --category, \
                     --amount, --description or --clear-description"
                        .into(),
                ));
            }

            let target = store.find(&id)?.id;
            let expense = store.edit(target, &update)?;

            println!("Updated expense:");
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::Delete { id } => {
            let target = store.find(&id)?.id;
            let removed = store.delete(target)?;
            println!("Deleted expense {} ({})", removed.id, removed);
        }
    }

    Ok(())
}

fn parse_amount(input: &str) -> ExpenseResult<Money> {
    Money::parse(input).map_err(|e| {
        ExpenseError::Validation(format!(
            "Invalid amount '{}': {}. Use a format like '12.50'",
            input, e
        ))
    })
}

fn parse_cli_date(input: &str) -> ExpenseResult<NaiveDate> {
    parse_date(input).map_err(|e| ExpenseError::Validation(e.to_string()))
}
