//! Business logic layer for spendlog
//!
//! Services wrap the storage layer with validation and the cross-list
//! bookkeeping the expense lists need.

pub mod balance;
pub mod expense;
pub mod merge;
pub mod registry;

pub use balance::BalanceService;
pub use expense::{EditOutcome, ExpenseService, RemoveOutcome};
pub use merge::merged_view;
pub use registry::CategoryService;
