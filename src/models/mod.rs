//! Core data models for spendlog
//!
//! This module contains the data structures of the expense-tracking domain:
//! expense records, balance snapshots, label registries, and the money type.

pub mod balance;
pub mod expense;
pub mod money;
pub mod registry;

pub use balance::{AccountKind, BalanceEntry, MAX_BALANCE_HISTORY};
pub use expense::{Expense, ExpenseUpdate, NewExpense, MAX_DESCRIPTION_LEN};
pub use money::Money;
pub use registry::{default_categories, LabelRegistry, MAX_CATEGORIES, PAYMENT_METHODS};
