//! Report CLI commands
//!
//! Totals, summaries, the budget alert, and the CSV export commands. Every
//! report runs over the merged de-duplicated view of the two expense lists.

use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use clap::Subcommand;

use crate::display::{format_budget_report, format_category_summary, format_expense_details};
use crate::error::{SpendlogError, SpendlogResult};
use crate::export::{self, ReportPeriod};
use crate::models::PAYMENT_METHODS;
use crate::reports::{filter, totals, BudgetReport};
use crate::services::{CategoryService, ExpenseService};
use crate::storage::Storage;

use super::expense::parse_amount;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Total of all active-list expenses
    Total,

    /// Per-category totals for a month (defaults to the current month)
    Summary {
        /// Month (1-12)
        #[arg(short, long)]
        month: Option<u32>,
        /// Year (e.g. 2024)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// The highest expense of a month (defaults to the current month)
    Highest {
        /// Month (1-12)
        #[arg(short, long)]
        month: Option<u32>,
        /// Year (e.g. 2024)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Compare this month's spending against a budget
    Budget {
        /// Budget limit; defaults to the configured monthly budget
        #[arg(short, long)]
        limit: Option<String>,
    },

    /// Export a CSV report
    #[command(subcommand)]
    Export(ExportCommands),
}

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the current month
    CurrentMonth {
        /// Directory to write into (defaults to the reports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a specific month
    Month {
        /// Month (1-12)
        month: u32,
        /// Year (e.g. 2024)
        year: i32,
        /// Directory to write into (defaults to the reports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a custom date range
    Range {
        /// Start date (YYYY-MM-DD), inclusive
        start: String,
        /// End date (YYYY-MM-DD), inclusive
        end: String,
        /// Directory to write into (defaults to the reports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &crate::config::Settings,
    cmd: ReportCommands,
) -> SpendlogResult<()> {
    let expenses = ExpenseService::new(storage);
    let categories = CategoryService::new(storage);

    match cmd {
        ReportCommands::Total => {
            let total = expenses.active_total()?;
            println!("Total for all current expenses: {}", total);
        }

        ReportCommands::Summary { month, year } => {
            let (month, year) = month_or_current(month, year)?;
            let records = filter::by_month(&expenses.merged_view()?, month, year);
            if records.is_empty() {
                return Err(SpendlogError::EmptySet(format!(
                    "{} {}",
                    export::month_name(month),
                    year
                )));
            }

            let registry = categories.list()?;
            let category_totals = totals::by_category(&records, registry.len());
            print!(
                "{}",
                format_category_summary(
                    &format!("{} {}", export::month_name(month), year),
                    &category_totals,
                    &registry
                )
            );
        }

        ReportCommands::Highest { month, year } => {
            let (month, year) = month_or_current(month, year)?;
            let records = filter::by_month(&expenses.merged_view()?, month, year);
            let highest = totals::highest(&records).map_err(|_| {
                SpendlogError::EmptySet(format!("{} {}", export::month_name(month), year))
            })?;

            let registry = categories.list()?;
            print!(
                "{}",
                format_expense_details(highest, &registry, &PAYMENT_METHODS)
            );
        }

        ReportCommands::Budget { limit } => {
            let limit = match limit {
                Some(ref s) => parse_amount(s)?,
                None => settings.monthly_budget.ok_or_else(|| {
                    SpendlogError::Config(
                        "No budget configured; pass --limit or set monthly_budget".into(),
                    )
                })?,
            };

            let now = Local::now().naive_local();
            let records = filter::by_month(&expenses.merged_view()?, now.month(), now.year());
            let spent = totals::total(&records);

            let report = BudgetReport::evaluate(limit, spent);
            print!(
                "{}",
                format_budget_report(
                    &format!("{} {}", export::month_name(now.month()), now.year()),
                    &report
                )
            );
        }

        ReportCommands::Export(cmd) => handle_export_command(storage, cmd)?,
    }

    Ok(())
}

fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> SpendlogResult<()> {
    let expenses = ExpenseService::new(storage);
    let categories = CategoryService::new(storage);
    let merged = expenses.merged_view()?;

    let (records, period, output) = match cmd {
        ExportCommands::CurrentMonth { output } => {
            let now = Local::now().naive_local();
            let period = ReportPeriod::Month {
                month: now.month(),
                year: now.year(),
            };
            (
                filter::by_month(&merged, now.month(), now.year()),
                period,
                output,
            )
        }

        ExportCommands::Month {
            month,
            year,
            output,
        } => {
            validate_month(month)?;
            let period = ReportPeriod::Month { month, year };
            (filter::by_month(&merged, month, year), period, output)
        }

        ExportCommands::Range { start, end, output } => {
            let start = day_start(&start)?;
            let end = day_end(&end)?;
            if end < start {
                return Err(SpendlogError::Validation(
                    "End date is before start date".into(),
                ));
            }
            let period = ReportPeriod::Range { start, end };
            (filter::by_date_range(&merged, start, end), period, output)
        }
    };

    let dir = output.unwrap_or_else(|| storage.paths().reports_dir());
    std::fs::create_dir_all(&dir)
        .map_err(|e| SpendlogError::Io(format!("Failed to create {}: {}", dir.display(), e)))?;

    let registry = categories.list()?;
    let path = export::export_to_path(&records, &period, &registry, &PAYMENT_METHODS, &dir)?;
    println!("Expense report generated: {}", path.display());

    Ok(())
}

fn month_or_current(month: Option<u32>, year: Option<i32>) -> SpendlogResult<(u32, i32)> {
    let now = Local::now().naive_local();
    let month = month.unwrap_or_else(|| now.month());
    let year = year.unwrap_or_else(|| now.year());
    validate_month(month)?;
    Ok((month, year))
}

fn validate_month(month: u32) -> SpendlogResult<()> {
    if !(1..=12).contains(&month) {
        return Err(SpendlogError::Validation(format!(
            "Month must be 1-12, got {}",
            month
        )));
    }
    Ok(())
}

/// Parse a date as the first second of that day
fn day_start(s: &str) -> SpendlogResult<NaiveDateTime> {
    let day = parse_day(s)?;
    day.and_hms_opt(0, 0, 0)
        .ok_or_else(|| SpendlogError::Validation(format!("Invalid date '{}'", s)))
}

/// Parse a date as the last second of that day
fn day_end(s: &str) -> SpendlogResult<NaiveDateTime> {
    let day = parse_day(s)?;
    day.and_hms_opt(23, 59, 59)
        .ok_or_else(|| SpendlogError::Validation(format!("Invalid date '{}'", s)))
}

fn parse_day(s: &str) -> SpendlogResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        SpendlogError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
    })
}
