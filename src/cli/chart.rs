//! Chart CLI commands
//!
//! Renders summaries to SVG files under the charts directory unless an
//! explicit output path is given.

use std::path::PathBuf;

use clap::Subcommand;
use tracing::info;

use crate::chart;
use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::models::Granularity;
use crate::reports::summary::to_series;
use crate::storage::ExpenseStore;

/// Chart subcommands
#[derive(Subcommand, Debug)]
pub enum ChartCommands {
    /// Bar chart of spending per category
    Category {
        /// Output file (defaults to charts/category.svg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Pie chart of each category's share of spending
    Pie {
        /// Output file (defaults to charts/pie.svg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Spending over time
    Trend {
        /// day or month
        #[arg(short, long, default_value_t = Granularity::Month)]
        granularity: Granularity,
        /// Draw bars instead of a line
        #[arg(short, long)]
        bars: bool,
        /// Output file (defaults to charts/trend-<granularity>.svg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a chart command
pub fn handle_chart_command(
    store: &ExpenseStore,
    settings: &Settings,
    paths: &ExpensePaths,
    cmd: ChartCommands,
) -> ExpenseResult<()> {
    let (document, output) = match cmd {
        ChartCommands::Category { output } => {
            let series = to_series(&store.summarize_by_category());
            let document = chart::bar_chart("Spending by Category", &series, &settings.chart)?;
            (document, output.unwrap_or_else(|| paths.charts_dir().join("category.svg")))
        }

        ChartCommands::Pie { output } => {
            let series = to_series(&store.summarize_by_category());
            let document = chart::pie_chart("Share of Spending", &series, &settings.chart)?;
            (document, output.unwrap_or_else(|| paths.charts_dir().join("pie.svg")))
        }

        ChartCommands::Trend {
            granularity,
            bars,
            output,
        } => {
            let series = to_series(&store.summarize_by_period(granularity));
            let title = match granularity {
                Granularity::Day => "Daily Spending",
                Granularity::Month => "Monthly Spending",
            };
            let document = if bars {
                chart::bar_chart(title, &series, &settings.chart)?
            } else {
                chart::line_chart(title, &series, &settings.chart)?
            };
            let default_name = format!("trend-{}.svg", granularity);
            (document, output.unwrap_or_else(|| paths.charts_dir().join(default_name)))
        }
    };

    chart::save(&document, &output)?;
    info!(path = %output.display(), "wrote chart");
    println!("Chart written to: {}", output.display());

    Ok(())
}
