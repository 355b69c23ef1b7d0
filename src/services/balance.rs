//! Balance service
//!
//! Business logic for the two account balances: every update records a
//! timestamped snapshot in the capped per-account history and persists the
//! whole balance state.

use chrono::{Local, Timelike};

use crate::error::SpendlogResult;
use crate::models::{AccountKind, BalanceEntry, Money};
use crate::storage::Storage;

/// Service for balance management
pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    /// Create a new balance service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the current balance for an account and record a snapshot
    pub fn update(&self, account: AccountKind, amount: Money) -> SpendlogResult<BalanceEntry> {
        let now = Local::now().naive_local();
        let entry = BalanceEntry::new(amount, now.with_nanosecond(0).unwrap_or(now));
        self.storage.balances.record(account, entry.clone())?;
        self.storage.balances.save()?;

        log::debug!("Updated {} balance to {}", account, amount);
        Ok(entry)
    }

    /// The current balance for an account
    pub fn current(&self, account: AccountKind) -> SpendlogResult<Money> {
        self.storage.balances.current(account)
    }

    /// The snapshot history for an account, oldest first
    pub fn history(&self, account: AccountKind) -> SpendlogResult<Vec<BalanceEntry>> {
        self.storage.balances.history(account)
    }
}
