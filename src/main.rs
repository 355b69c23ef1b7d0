use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_balance_command, handle_category_command, handle_expense_command,
    handle_memory_command, handle_report_command,
};
use spendlog::config::{paths::SpendlogPaths, settings::Settings};
use spendlog::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "spendlog is a single-user expense tracker for the terminal. \
                  It records expenses and account balances to local files and \
                  produces summaries, budget alerts, and CSV reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(spendlog::cli::ExpenseCommands),

    /// Balance management commands
    #[command(subcommand, alias = "bal")]
    Balance(spendlog::cli::BalanceCommands),

    /// Reports and analysis commands
    #[command(subcommand)]
    Report(spendlog::cli::ReportCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(spendlog::cli::CategoryCommands),

    /// Expense memory commands
    #[command(subcommand)]
    Memory(spendlog::cli::MemoryCommands),

    /// Show current configuration and paths
    Config {
        /// Set the monthly budget used by 'report budget'
        #[arg(long)]
        set_budget: Option<String>,
        /// Clear the configured monthly budget
        #[arg(long, conflicts_with = "set_budget")]
        clear_budget: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendlogPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, cmd)?;
        }
        Some(Commands::Balance(cmd)) => {
            handle_balance_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Memory(cmd)) => {
            handle_memory_command(&storage, cmd)?;
        }
        Some(Commands::Config {
            set_budget,
            clear_budget,
        }) => {
            let mut settings = settings;
            if let Some(ref budget) = set_budget {
                settings.monthly_budget = Some(spendlog::cli::expense::parse_amount(budget)?);
                settings.save(&paths)?;
                println!("Monthly budget set.");
            } else if clear_budget {
                settings.monthly_budget = None;
                settings.save(&paths)?;
                println!("Monthly budget cleared.");
            }

            println!("spendlog Configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!();
            println!("Settings:");
            match settings.monthly_budget {
                Some(budget) => println!("  Monthly budget: {}", budget),
                None => println!("  Monthly budget: (not set)"),
            }
        }
        None => {
            println!("spendlog - Terminal-based personal expense tracker");
            println!();
            println!("Run 'spendlog --help' for usage information.");
            println!("Run 'spendlog expense list' to see your expenses.");
        }
    }

    Ok(())
}
