//! Expense CLI commands
//!
//! Implements CLI commands for adding, listing, editing, and deleting
//! expenses. All raw input parsing happens here; the service layer only
//! sees typed, semantically checked values.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use clap::Subcommand;

use crate::display::format_expense_table;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{ExpenseUpdate, Money, NewExpense, PAYMENT_METHODS};
use crate::services::{CategoryService, ExpenseService};
use crate::storage::{ExpenseList, Storage};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount spent (e.g. "120" or "120.50")
        amount: String,
        /// Short description
        description: String,
        /// Category index (see 'category list')
        #[arg(short, long)]
        category: usize,
        /// Payment method index (0 Cash, 1 UPI, 2 Card)
        #[arg(short, long)]
        payment_method: usize,
        /// Expense date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    List,

    /// Edit an expense by its position in the active list
    Edit {
        /// 1-based position in the list
        number: usize,
        /// Edit the memory list instead of the active list
        #[arg(long)]
        memory: bool,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// New category index
        #[arg(short, long)]
        category: Option<usize>,
        /// New payment method index
        #[arg(short, long)]
        payment_method: Option<usize>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense by its position in the merged listing
    Delete {
        /// 1-based position as shown by 'expense list'
        number: usize,
    },
}

/// Memory subcommands
#[derive(Subcommand)]
pub enum MemoryCommands {
    /// Drop all memory entries, keeping the active list
    Clear {
        /// Actually clear; without this flag nothing is deleted
        #[arg(long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> SpendlogResult<()> {
    let service = ExpenseService::new(storage);
    let categories = CategoryService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            payment_method,
            date,
        } => {
            let expense = service.add(NewExpense {
                amount: parse_amount(&amount)?,
                description,
                category,
                payment_method,
                date: match date {
                    Some(ref s) => parse_date(s)?,
                    None => now_second_precision(),
                },
            })?;
            println!("Added expense: {}", expense);
        }

        ExpenseCommands::List => {
            let merged = merged_by_date_desc(&service)?;
            let registry = categories.list()?;
            print!(
                "{}",
                format_expense_table(&merged, &registry, &PAYMENT_METHODS)
            );
        }

        ExpenseCommands::Edit {
            number,
            memory,
            amount,
            description,
            category,
            payment_method,
            date,
        } => {
            let list = if memory {
                ExpenseList::Memory
            } else {
                ExpenseList::Active
            };
            let index = number
                .checked_sub(1)
                .ok_or_else(|| SpendlogError::Validation("Numbers start at 1".into()))?;

            let update = ExpenseUpdate {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                description,
                category,
                payment_method,
                date: date.as_deref().map(parse_date).transpose()?,
            };

            if update.is_empty() {
                println!("No changes specified. Use --amount, --description, --category, --payment-method, or --date.");
                return Ok(());
            }

            let outcome = service.edit(list, index, update)?;
            println!("Updated expense: {}", outcome.expense);
            if outcome.propagated {
                println!("The matching copy in the other list was updated as well.");
            }
        }

        ExpenseCommands::Delete { number } => {
            let merged = merged_by_date_desc(&service)?;
            let index = number
                .checked_sub(1)
                .ok_or_else(|| SpendlogError::Validation("Numbers start at 1".into()))?;
            let target = merged.get(index).ok_or(SpendlogError::Index {
                index,
                len: merged.len(),
            })?;

            let outcome = service.remove(target)?;
            if !outcome.any() {
                return Err(SpendlogError::expense_not_found(target.to_string()));
            }
            println!("Deleted expense: {}", target);
        }
    }

    Ok(())
}

/// Handle a memory command
pub fn handle_memory_command(storage: &Storage, cmd: MemoryCommands) -> SpendlogResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        MemoryCommands::Clear { force } => {
            if !force {
                println!("This would drop every memory entry and cannot be undone.");
                println!("Re-run with --force to clear the memory.");
                return Ok(());
            }
            let dropped = service.clear_memory()?;
            println!("Cleared {} memory entries.", dropped);
        }
    }

    Ok(())
}

/// Merged view sorted newest first, the order used for listing and deletion
fn merged_by_date_desc(service: &ExpenseService) -> SpendlogResult<Vec<crate::models::Expense>> {
    let mut merged = service.merged_view()?;
    merged.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(merged)
}

/// The current local time, truncated to the second precision record dates carry
fn now_second_precision() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Parse a positive decimal amount
pub fn parse_amount(s: &str) -> SpendlogResult<Money> {
    Money::parse(s).map_err(|e| SpendlogError::Validation(e.to_string()))
}

/// Parse a YYYY-MM-DD date; times land at noon so whole-day range filters
/// always include the record
pub fn parse_date(s: &str) -> SpendlogResult<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| SpendlogError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))?;
    date.and_hms_opt(12, 0, 0)
        .ok_or_else(|| SpendlogError::Validation(format!("Invalid date '{}'", s)))
}
