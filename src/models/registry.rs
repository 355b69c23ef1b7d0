//! Label registries for categories and payment methods
//!
//! A registry is a small ordered list of human-readable labels referenced by
//! numeric index from expense records. Category labels are bounded and
//! unique case-insensitively; payment-method labels are a fixed in-process
//! list.

use std::fmt;

/// Maximum number of category labels
pub const MAX_CATEGORIES: usize = 11;

/// The fixed payment-method labels, referenced by index
pub const PAYMENT_METHODS: [&str; 3] = ["Cash", "UPI", "Card"];

/// The default category labels seeded on first use
pub fn default_categories() -> Vec<String> {
    [
        "Food & Groceries",
        "Transport",
        "Utilities",
        "Entertainment",
        "Shopping",
        "Housing",
        "Investment",
        "Healthcare",
        "Education",
        "Banking",
        "Miscellaneous",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// An ordered, bounded set of category labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRegistry {
    labels: Vec<String>,
}

impl LabelRegistry {
    /// Create a registry from existing labels (e.g. loaded from disk)
    pub fn from_labels(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Create a registry holding the default category labels
    pub fn with_defaults() -> Self {
        Self {
            labels: default_categories(),
        }
    }

    /// Number of labels in the registry
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check whether the registry holds no labels
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All labels in registry order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Look up a label by index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Check whether an index is valid for this registry
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.labels.len()
    }

    /// Check for an existing label, ignoring case
    pub fn contains_ignore_case(&self, label: &str) -> bool {
        let lowered = label.to_lowercase();
        self.labels.iter().any(|l| l.to_lowercase() == lowered)
    }

    /// Append a label, enforcing the size cap and case-insensitive uniqueness
    pub fn push(&mut self, label: impl Into<String>) -> Result<(), RegistryError> {
        let label = label.into();
        let trimmed = label.trim();

        if trimmed.is_empty() {
            return Err(RegistryError::EmptyLabel);
        }
        if self.labels.len() >= MAX_CATEGORIES {
            return Err(RegistryError::Full(MAX_CATEGORIES));
        }
        if self.contains_ignore_case(trimmed) {
            return Err(RegistryError::Duplicate(trimmed.to_string()));
        }

        self.labels.push(trimmed.to_string());
        Ok(())
    }

    /// Replace the contents wholesale with the default labels
    pub fn reset_to_defaults(&mut self) {
        self.labels = default_categories();
    }
}

impl Default for LabelRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Validation errors for registry mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    EmptyLabel,
    Full(usize),
    Duplicate(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Label cannot be empty"),
            Self::Full(max) => write!(f, "Registry already holds the maximum of {} labels", max),
            Self::Duplicate(label) => write!(f, "Label already exists: {}", label),
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let registry = LabelRegistry::with_defaults();
        assert_eq!(registry.len(), MAX_CATEGORIES);
        assert_eq!(registry.get(0), Some("Food & Groceries"));
        assert_eq!(registry.get(10), Some("Miscellaneous"));
        assert_eq!(registry.get(11), None);
    }

    #[test]
    fn test_push_and_lookup() {
        let mut registry = LabelRegistry::from_labels(vec!["Food".into()]);
        registry.push("Travel").unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(1), Some("Travel"));
        assert!(registry.contains_index(1));
        assert!(!registry.contains_index(2));
    }

    #[test]
    fn test_push_rejects_duplicate_case_insensitive() {
        let mut registry = LabelRegistry::from_labels(vec!["Food".into()]);
        assert_eq!(
            registry.push("FOOD"),
            Err(RegistryError::Duplicate("FOOD".into()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_push_rejects_empty() {
        let mut registry = LabelRegistry::from_labels(vec![]);
        assert_eq!(registry.push("   "), Err(RegistryError::EmptyLabel));
    }

    #[test]
    fn test_push_enforces_cap() {
        let mut registry = LabelRegistry::with_defaults();
        assert_eq!(
            registry.push("One More"),
            Err(RegistryError::Full(MAX_CATEGORIES))
        );
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut registry = LabelRegistry::from_labels(vec!["Only".into()]);
        registry.reset_to_defaults();
        assert_eq!(registry.labels(), default_categories().as_slice());
    }

    #[test]
    fn test_payment_methods_fixed() {
        assert_eq!(PAYMENT_METHODS, ["Cash", "UPI", "Card"]);
    }
}
