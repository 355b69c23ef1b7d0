//! Category registry service
//!
//! Business logic for the category label registry: append with uniqueness
//! and capacity rules, reload from disk, and reset to the default set. The
//! payment-method labels are fixed and exposed read-only.

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{registry::RegistryError, LabelRegistry, PAYMENT_METHODS};
use crate::storage::Storage;

/// Service for category registry management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The current category registry
    pub fn list(&self) -> SpendlogResult<LabelRegistry> {
        self.storage.categories.registry()
    }

    /// Append a category label and persist
    pub fn add(&self, label: &str) -> SpendlogResult<String> {
        let mut registry = self.storage.categories.registry()?;
        registry.push(label).map_err(|e| match e {
            RegistryError::Duplicate(label) => SpendlogError::Duplicate {
                entity_type: "Category",
                identifier: label,
            },
            other => SpendlogError::Validation(other.to_string()),
        })?;

        let added = registry
            .labels()
            .last()
            .cloned()
            .unwrap_or_else(|| label.trim().to_string());

        self.storage.categories.set_registry(registry)?;
        self.storage.categories.save()?;

        log::info!("Added category '{}'", added);
        Ok(added)
    }

    /// Re-read the label file, seeding defaults when it is absent or empty
    pub fn reload(&self) -> SpendlogResult<LabelRegistry> {
        self.storage.categories.load()?;
        self.storage.categories.registry()
    }

    /// Replace the registry wholesale with the default labels and persist
    pub fn reset(&self) -> SpendlogResult<LabelRegistry> {
        let mut registry = self.storage.categories.registry()?;
        registry.reset_to_defaults();
        self.storage.categories.set_registry(registry.clone())?;
        self.storage.categories.save()?;

        log::info!("Reset categories to defaults");
        Ok(registry)
    }

    /// The fixed payment-method labels
    pub fn payment_methods(&self) -> &'static [&'static str] {
        &PAYMENT_METHODS
    }
}
