//! Report formatting utilities for terminal output

use std::collections::BTreeMap;

use crate::config::Settings;
use crate::models::{Money, Period};

const BAR_WIDTH: usize = 30;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Per-category totals, alphabetical, with an optional bar per row
pub fn format_category_summary(
    totals: &BTreeMap<String, Money>,
    settings: &Settings,
    bars: bool,
) -> String {
    let rows: Vec<(String, Money)> = totals.iter().map(|(k, v)| (k.clone(), *v)).collect();
    format_summary("Spending by Category", "Category", &rows, settings, bars)
}

/// Per-period totals, chronological, with an optional bar per row
pub fn format_period_summary(
    totals: &BTreeMap<Period, Money>,
    settings: &Settings,
    bars: bool,
) -> String {
    let rows: Vec<(String, Money)> = totals.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    format_summary("Spending by Period", "Period", &rows, settings, bars)
}

/// One-line grand total
pub fn format_total(total: Money, count: usize, settings: &Settings) -> String {
    format!(
        "Total spending: {} across {} expense(s)\n",
        total.format_with_symbol(&settings.currency_symbol),
        count
    )
}

fn format_summary(
    title: &str,
    key_header: &str,
    rows: &[(String, Money)],
    settings: &Settings,
    bars: bool,
) -> String {
    let mut output = String::new();
    output.push_str(title);
    output.push('\n');
    output.push_str(&separator(title.chars().count()));
    output.push('\n');

    if rows.is_empty() {
        output.push_str("No expenses recorded.\n");
        return output;
    }

    let key_width = rows
        .iter()
        .map(|(key, _)| key.chars().count())
        .chain(std::iter::once(key_header.len()))
        .max()
        .unwrap_or(key_header.len());
    let max = rows
        .iter()
        .map(|(_, amount)| amount.to_f64())
        .fold(0.0_f64, f64::max);

    output.push_str(&format!(
        "{:<key_width$}  {:>14}\n",
        key_header,
        "Amount",
        key_width = key_width
    ));

    for (key, amount) in rows {
        let line = format!(
            "{:<key_width$}  {:>14}",
            key,
            amount.format_with_symbol(&settings.currency_symbol),
            key_width = key_width
        );
        if bars {
            output.push_str(&format!(
                "{}  {}\n",
                line,
                format_bar(amount.to_f64(), max, BAR_WIDTH)
            ));
        } else {
            output.push_str(&line);
            output.push('\n');
        }
    }

    output
}
