use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_chart_command, handle_expense_command, handle_export_command, handle_history_command,
    handle_report_command, ChartCommands, ExpenseCommands, ExportArgs, ReportCommands,
};
use expense_tracker::config::paths::DATA_DIR_ENV;
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::{open_store, seed_sample_data};

/// Environment variable holding a tracing filter (e.g. "debug")
const LOG_ENV: &str = "EXPENSES_LOG";

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Record expenses by date and category, summarize spending by \
                  category, day or month, and render SVG charts. Data is kept in \
                  a single human-readable JSON file."
)]
struct Cli {
    /// Directory holding expenses.json, config.json and audit.log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Spending summaries
    #[command(subcommand)]
    Report(ReportCommands),

    /// Render summaries as SVG charts
    #[command(subcommand)]
    Chart(ChartCommands),

    /// Export all expenses
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directory and default settings
    Init {
        /// Also add a few sample expenses when the store is empty
        #[arg(long)]
        sample: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut store = open_store(&paths, &settings)?;
            handle_expense_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let store = open_store(&paths, &settings)?;
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Chart(cmd)) => {
            let store = open_store(&paths, &settings)?;
            handle_chart_command(&store, &settings, &paths, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let store = open_store(&paths, &settings)?;
            handle_export_command(&store, args)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&paths, limit)?;
        }
        Some(Commands::Init { sample }) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            let mut store = open_store(&paths, &settings)?;
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            if !store.path().exists() {
                store.save()?;
            }

            if sample {
                let added = seed_sample_data(&mut store)?;
                if added > 0 {
                    println!("Added {} sample expenses.", added);
                } else {
                    println!("Store already has expenses; no samples added.");
                }
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'expenses add <amount> <category>' to record an expense.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.data_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Charts:         {}", paths.charts_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Default sort:    {}", settings.default_sort);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Log level:       {}", settings.log_level);
            println!(
                "  Chart size:      {}x{}",
                settings.chart.width, settings.chart.height
            );
        }
        None => {
            println!("expenses - personal expense tracker");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!("expense_tracker={}", settings.log_level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
