//! Storage layer for spendlog
//!
//! Provides file-backed storage with atomic writes and automatic directory
//! creation. Expense lists and balances persist as JSON, category labels as
//! a line-oriented text file.

pub mod balances;
pub mod categories;
pub mod expenses;
pub mod file_io;

pub use balances::BalanceRepository;
pub use categories::CategoryRepository;
pub use expenses::{ExpenseList, ExpenseRepository, MAX_ACTIVE, MAX_MEMORY};
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::SpendlogPaths;
use crate::error::SpendlogError;
use crate::models::LabelRegistry;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendlogPaths,
    pub expenses: ExpenseRepository,
    pub balances: BalanceRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SpendlogPaths) -> Result<Self, SpendlogError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.active_file(), paths.memory_file()),
            balances: BalanceRepository::new(paths.balances_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendlogPaths {
        &self.paths
    }

    /// Load all data from disk
    ///
    /// Startup is forgiving: a store that cannot be read is logged and left
    /// at its default state instead of aborting the session.
    pub fn load_all(&self) -> Result<(), SpendlogError> {
        if let Err(e) = self.categories.load() {
            log::warn!("Could not load categories, using defaults: {}", e);
            self.categories.set_registry(LabelRegistry::with_defaults())?;
        }
        if let Err(e) = self.expenses.load() {
            log::warn!("Could not load expense lists, starting empty: {}", e);
        }
        if let Err(e) = self.balances.load() {
            log::warn!("Could not load balances, starting at zero: {}", e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("reports").exists());
        storage.load_all().unwrap();
    }

    #[test]
    fn test_load_all_tolerates_corrupt_stores() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();

        std::fs::write(paths.active_file(), "not json").unwrap();
        std::fs::write(paths.balances_file(), "{ truncated").unwrap();

        storage.load_all().unwrap();
        assert_eq!(storage.expenses.len(ExpenseList::Active).unwrap(), 0);
        assert_eq!(
            storage.categories.registry().unwrap().len(),
            crate::models::MAX_CATEGORIES
        );
    }
}
