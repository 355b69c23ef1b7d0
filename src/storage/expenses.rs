//! Expense repository for JSON storage
//!
//! Holds the two ordered expense collections: the bounded active list for the
//! current cycle and the longer most-recent-first rolling memory. Each list
//! persists to its own JSON file and every mutating operation rewrites the
//! whole file.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendlogError;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Maximum number of entries in the active list
pub const MAX_ACTIVE: usize = 100;

/// Maximum number of entries in the rolling memory
pub const MAX_MEMORY: usize = 500;

/// Selects one of the two expense lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseList {
    /// The current-cycle list, bounded to [`MAX_ACTIVE`]
    Active,
    /// The most-recent-first rolling history, bounded to [`MAX_MEMORY`]
    Memory,
}

impl ExpenseList {
    /// The other list, the one edits are propagated into
    pub fn other(self) -> Self {
        match self {
            Self::Active => Self::Memory,
            Self::Memory => Self::Active,
        }
    }
}

impl std::fmt::Display for ExpenseList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Serializable expense list structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseListData {
    expenses: Vec<Expense>,
}

/// Repository for the active and memory expense lists
pub struct ExpenseRepository {
    active_path: PathBuf,
    memory_path: PathBuf,
    active: RwLock<Vec<Expense>>,
    memory: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(active_path: PathBuf, memory_path: PathBuf) -> Self {
        Self {
            active_path,
            memory_path,
            active: RwLock::new(Vec::new()),
            memory: RwLock::new(Vec::new()),
        }
    }

    /// Load both lists from disk; missing files load as empty lists
    pub fn load(&self) -> Result<(), SpendlogError> {
        let active_data: ExpenseListData = read_json(&self.active_path)?;
        let memory_data: ExpenseListData = read_json(&self.memory_path)?;

        let mut active = self.active.write().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut memory = self.memory.write().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *active = active_data.expenses;
        *memory = memory_data.expenses;

        log::debug!(
            "Loaded {} active and {} memory expenses",
            active.len(),
            memory.len()
        );

        Ok(())
    }

    /// Save one list to disk
    pub fn save(&self, list: ExpenseList) -> Result<(), SpendlogError> {
        let (guard, path) = match list {
            ExpenseList::Active => (&self.active, &self.active_path),
            ExpenseList::Memory => (&self.memory, &self.memory_path),
        };

        let expenses = guard.read().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let data = ExpenseListData {
            expenses: expenses.clone(),
        };
        write_json_atomic(path, &data)
    }

    /// Save both lists to disk
    pub fn save_both(&self) -> Result<(), SpendlogError> {
        self.save(ExpenseList::Active)?;
        self.save(ExpenseList::Memory)
    }

    /// Get a snapshot of a list
    pub fn snapshot(&self, list: ExpenseList) -> Result<Vec<Expense>, SpendlogError> {
        let guard = self.lock_for(list);
        let expenses = guard.read().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(expenses.clone())
    }

    /// Number of entries in a list
    pub fn len(&self, list: ExpenseList) -> Result<usize, SpendlogError> {
        let guard = self.lock_for(list);
        let expenses = guard.read().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(expenses.len())
    }

    /// Get the entry at `index` in a list
    pub fn get(&self, list: ExpenseList, index: usize) -> Result<Option<Expense>, SpendlogError> {
        let guard = self.lock_for(list);
        let expenses = guard.read().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(expenses.get(index).cloned())
    }

    /// Overwrite the entry at `index` in a list
    pub fn set(
        &self,
        list: ExpenseList,
        index: usize,
        expense: Expense,
    ) -> Result<(), SpendlogError> {
        let guard = self.lock_for(list);
        let mut expenses = guard.write().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let len = expenses.len();
        match expenses.get_mut(index) {
            Some(slot) => {
                *slot = expense;
                Ok(())
            }
            None => Err(SpendlogError::Index { index, len }),
        }
    }

    /// Append an expense to the end of the active list
    pub fn append_active(&self, expense: Expense) -> Result<(), SpendlogError> {
        let mut active = self.active.write().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        active.push(expense);
        Ok(())
    }

    /// Prepend an expense to the memory list, truncating to [`MAX_MEMORY`]
    pub fn push_memory_front(&self, expense: Expense) -> Result<(), SpendlogError> {
        let mut memory = self.memory.write().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        memory.insert(0, expense);
        memory.truncate(MAX_MEMORY);
        Ok(())
    }

    /// Remove the first entry of a list equal to `expense`
    ///
    /// Returns whether an entry was removed.
    pub fn remove_first_equal(
        &self,
        list: ExpenseList,
        expense: &Expense,
    ) -> Result<bool, SpendlogError> {
        let guard = self.lock_for(list);
        let mut expenses = guard.write().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match expenses.iter().position(|e| e == expense) {
            Some(index) => {
                expenses.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Overwrite the first entry of a list equal to `old` with `new`
    ///
    /// Returns whether an entry was replaced.
    pub fn replace_first_equal(
        &self,
        list: ExpenseList,
        old: &Expense,
        new: Expense,
    ) -> Result<bool, SpendlogError> {
        let guard = self.lock_for(list);
        let mut expenses = guard.write().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match expenses.iter().position(|e| e == old) {
            Some(index) => {
                expenses[index] = new;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drop every memory entry, keeping the active list intact
    pub fn clear_memory(&self) -> Result<usize, SpendlogError> {
        let mut memory = self.memory.write().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let dropped = memory.len();
        memory.clear();
        Ok(dropped)
    }

    fn lock_for(&self, list: ExpenseList) -> &RwLock<Vec<Expense>> {
        match list {
            ExpenseList::Active => &self.active,
            ExpenseList::Memory => &self.memory,
        }
    }
}
