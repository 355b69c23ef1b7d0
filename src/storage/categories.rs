//! Category label storage
//!
//! Category labels persist as a plain text file, one label per line. When
//! the file is absent or yields no labels, the default set is seeded and
//! written back immediately so the on-disk state matches what the process
//! uses.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendlogError;
use crate::models::LabelRegistry;

/// Repository for the category label registry
pub struct CategoryRepository {
    path: PathBuf,
    registry: RwLock<LabelRegistry>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            registry: RwLock::new(LabelRegistry::from_labels(Vec::new())),
        }
    }

    /// Load labels from disk, seeding and persisting defaults when the file
    /// is absent or empty
    pub fn load(&self) -> Result<(), SpendlogError> {
        let labels = if self.path.exists() {
            let contents = fs::read_to_string(&self.path).map_err(|e| {
                SpendlogError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
            contents
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect()
        } else {
            Vec::new()
        };

        let seeded = labels.is_empty();
        let registry = if seeded {
            log::info!("No categories on disk, seeding defaults");
            LabelRegistry::with_defaults()
        } else {
            LabelRegistry::from_labels(labels)
        };

        {
            let mut guard = self.registry.write().map_err(|e| {
                SpendlogError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            *guard = registry;
        }

        if seeded {
            self.save()?;
        }

        Ok(())
    }

    /// Save labels to disk, one per line
    pub fn save(&self) -> Result<(), SpendlogError> {
        let registry = self.registry.read().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SpendlogError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut contents = registry.labels().join("\n");
        contents.push('\n');
        fs::write(&self.path, contents).map_err(|e| {
            SpendlogError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    /// Get a snapshot of the current registry
    pub fn registry(&self) -> Result<LabelRegistry, SpendlogError> {
        let registry = self.registry.read().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(registry.clone())
    }

    /// Replace the in-memory registry
    pub fn set_registry(&self, registry: LabelRegistry) -> Result<(), SpendlogError> {
        let mut guard = self.registry.write().map_err(|e| {
            SpendlogError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *guard = registry;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_categories, MAX_CATEGORIES};
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_seeds_defaults_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.txt");

        let repo = CategoryRepository::new(path.clone());
        repo.load().unwrap();

        assert_eq!(repo.registry().unwrap().len(), MAX_CATEGORIES);
        // Seeding writes the file immediately
        assert!(path.exists());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Food & Groceries\n"));
    }

    #[test]
    fn test_load_empty_file_seeds_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.txt");
        std::fs::write(&path, "\n  \n").unwrap();

        let repo = CategoryRepository::new(path);
        repo.load().unwrap();

        assert_eq!(
            repo.registry().unwrap().labels(),
            default_categories().as_slice()
        );
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.txt");

        let repo = CategoryRepository::new(path.clone());
        repo.set_registry(LabelRegistry::from_labels(vec![
            "Rent".into(),
            "Fuel".into(),
        ]))
        .unwrap();
        repo.save().unwrap();

        let reloaded = CategoryRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.registry().unwrap().labels(), ["Rent", "Fuel"]);
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.txt");
        std::fs::write(&path, "Rent\n\n  Fuel  \n").unwrap();

        let repo = CategoryRepository::new(path);
        repo.load().unwrap();
        assert_eq!(repo.registry().unwrap().labels(), ["Rent", "Fuel"]);
    }
}
