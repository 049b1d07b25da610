//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;

use super::report::truncate;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.to_string(),
            date: settings.format_date(expense.date),
            category: expense.category.clone(),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
            description: truncate(expense.description_or_empty(), 40),
        }
    }
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow::new(e, settings));
    let mut table = Table::new(rows);
    table.with(Style::sharp());

    format!("{}\n{} expense(s)\n", table, expenses.len())
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("UUID:        {}\n", expense.id.as_uuid()));
    output.push_str(&format!("Date:        {}\n", settings.format_date(expense.date)));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));

    if let Some(description) = &expense.description {
        output.push_str(&format!("Description: {}\n", description));
    }

    output.push_str(&format!(
        "Created:     {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    if expense.updated_at != expense.created_at {
        output.push_str(&format!(
            "Updated:     {}\n",
            expense.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    output
}
