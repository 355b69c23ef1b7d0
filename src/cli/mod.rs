//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod balance;
pub mod category;
pub mod expense;
pub mod report;

pub use balance::{handle_balance_command, BalanceCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{
    handle_expense_command, handle_memory_command, ExpenseCommands, MemoryCommands,
};
pub use report::{handle_report_command, ReportCommands};
