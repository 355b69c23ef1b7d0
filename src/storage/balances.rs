//! Balance repository for JSON storage
//!
//! Persists the current bank and cash balances together with their capped
//! snapshot histories in a single JSON file.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendlogError;
use crate::models::{AccountKind, BalanceEntry, Money, MAX_BALANCE_HISTORY};

use super::file_io::{read_json, write_json_atomic};

/// Serializable balance state
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BalanceData {
    bank_balance: Money,
    cash_balance: Money,
    bank_history: Vec<BalanceEntry>,
    cash_history: Vec<BalanceEntry>,
}

/// Repository for balance persistence
pub struct BalanceRepository {
    path: PathBuf,
    data: RwLock<BalanceData>,
}

impl BalanceRepository {
    /// Create a new balance repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BalanceData::default()),
        }
    }

    /// Load balance state from disk; a missing file loads as zero balances
    pub fn load(&self) -> Result<(), SpendlogError> {
        let file_data: BalanceData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data;

        Ok(())
    }

    /// Save balance state to disk
    pub fn save(&self) -> Result<(), SpendlogError> {
        let data = self.data.read().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get the current balance for an account
    pub fn current(&self, account: AccountKind) -> Result<Money, SpendlogError> {
        let data = self.data.read().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(match account {
            AccountKind::Bank => data.bank_balance,
            AccountKind::Cash => data.cash_balance,
        })
    }

    /// Get the snapshot history for an account, oldest first
    pub fn history(&self, account: AccountKind) -> Result<Vec<BalanceEntry>, SpendlogError> {
        let data = self.data.read().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(match account {
            AccountKind::Bank => data.bank_history.clone(),
            AccountKind::Cash => data.cash_history.clone(),
        })
    }

    /// Set the current balance for an account and append a snapshot,
    /// dropping the oldest entries past [`MAX_BALANCE_HISTORY`]
    pub fn record(&self, account: AccountKind, entry: BalanceEntry) -> Result<(), SpendlogError> {
        let mut guard = self.data.write().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let data = &mut *guard;
        let (balance, history) = match account {
            AccountKind::Bank => (&mut data.bank_balance, &mut data.bank_history),
            AccountKind::Cash => (&mut data.cash_balance, &mut data.cash_history),
        };

        *balance = entry.amount;
        history.push(entry);
        if history.len() > MAX_BALANCE_HISTORY {
            let excess = history.len() - MAX_BALANCE_HISTORY;
            history.drain(..excess);
        }

        Ok(())
    }
}
