//! Expense service
//!
//! Business logic for the expense lists: validated creation, removal by
//! full-field equality, and partial edits that propagate to the matching
//! copy in the other list.

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{
    Expense, ExpenseUpdate, LabelRegistry, Money, NewExpense, MAX_DESCRIPTION_LEN, PAYMENT_METHODS,
};
use crate::services::merge;
use crate::storage::{ExpenseList, Storage, MAX_ACTIVE};

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Which lists a removal actually touched
///
/// Each list is attempted independently; missing in one list while present
/// in the other is a valid outcome, and missing in both is "not found"
/// rather than a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub from_active: bool,
    pub from_memory: bool,
}

impl RemoveOutcome {
    /// Whether anything was removed at all
    pub fn any(&self) -> bool {
        self.from_active || self.from_memory
    }
}

/// Result of an edit, including whether the other list held a copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// The record after the update
    pub expense: Expense,
    /// Whether the pre-edit copy in the other list was found and overwritten
    pub propagated: bool,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    ///
    /// Appends to the active list and pushes to the front of memory
    /// (truncating memory to its cap), then persists both lists. Storage
    /// never de-duplicates: adding identical fields twice stores two
    /// physically distinct entries, and only the merged view collapses them.
    pub fn add(&self, input: NewExpense) -> SpendlogResult<Expense> {
        let registry = self.storage.categories.registry()?;

        validate_amount(input.amount)?;
        let description = validate_description(&input.description)?;
        validate_category(&registry, input.category)?;
        validate_payment_method(input.payment_method)?;

        if self.storage.expenses.len(ExpenseList::Active)? >= MAX_ACTIVE {
            return Err(SpendlogError::Validation(format!(
                "Active list is full ({} entries)",
                MAX_ACTIVE
            )));
        }

        let expense = Expense::new(
            input.amount,
            description,
            input.category,
            input.payment_method,
            input.date,
        );

        self.storage.expenses.append_active(expense.clone())?;
        self.storage.expenses.push_memory_front(expense.clone())?;
        self.storage.expenses.save_both()?;

        log::debug!("Added expense: {}", expense);
        Ok(expense)
    }

    /// Remove the first entry equal to `expense` from each list
    ///
    /// Both lists are scanned independently and persisted afterwards. The
    /// outcome reports per-list whether a matching entry was found.
    pub fn remove(&self, expense: &Expense) -> SpendlogResult<RemoveOutcome> {
        let from_active = self
            .storage
            .expenses
            .remove_first_equal(ExpenseList::Active, expense)?;
        let from_memory = self
            .storage
            .expenses
            .remove_first_equal(ExpenseList::Memory, expense)?;

        self.storage.expenses.save_both()?;

        let outcome = RemoveOutcome {
            from_active,
            from_memory,
        };
        log::debug!(
            "Removed expense (active: {}, memory: {})",
            from_active,
            from_memory
        );
        Ok(outcome)
    }

    /// Apply a partial update to the record at `index` in the selected list
    ///
    /// Supplied fields are validated up front; a validation failure leaves
    /// both lists untouched. After the update is applied, the other list is
    /// scanned for an entry equal to the pre-edit snapshot and, when found,
    /// that entry is overwritten with the updated record. Both lists are
    /// persisted whether or not propagation found a match.
    pub fn edit(
        &self,
        list: ExpenseList,
        index: usize,
        update: ExpenseUpdate,
    ) -> SpendlogResult<EditOutcome> {
        let snapshot = self
            .storage
            .expenses
            .get(list, index)?
            .ok_or(SpendlogError::Index {
                index,
                len: self.storage.expenses.len(list)?,
            })?;

        let registry = self.storage.categories.registry()?;

        // Validate every supplied field before touching state
        let mut updated = snapshot.clone();
        if let Some(amount) = update.amount {
            validate_amount(amount)?;
            updated.amount = amount;
        }
        if let Some(ref description) = update.description {
            updated.description = validate_description(description)?;
        }
        if let Some(category) = update.category {
            validate_category(&registry, category)?;
            updated.category = category;
        }
        if let Some(payment_method) = update.payment_method {
            validate_payment_method(payment_method)?;
            updated.payment_method = payment_method;
        }
        if let Some(date) = update.date {
            updated.date = date;
        }

        self.storage.expenses.set(list, index, updated.clone())?;

        // Keep the duplicate copy in the other list in step, keyed by the
        // pre-edit field values
        let propagated =
            self.storage
                .expenses
                .replace_first_equal(list.other(), &snapshot, updated.clone())?;

        self.storage.expenses.save_both()?;

        log::debug!("Edited {} expense at {} (propagated: {})", list, index, propagated);
        Ok(EditOutcome {
            expense: updated,
            propagated,
        })
    }

    /// The de-duplicated union of the active and memory lists
    pub fn merged_view(&self) -> SpendlogResult<Vec<Expense>> {
        let active = self.storage.expenses.snapshot(ExpenseList::Active)?;
        let memory = self.storage.expenses.snapshot(ExpenseList::Memory)?;
        Ok(merge::merged_view(&active, &memory))
    }

    /// Sum of all active-list amounts
    pub fn active_total(&self) -> SpendlogResult<Money> {
        let active = self.storage.expenses.snapshot(ExpenseList::Active)?;
        Ok(active.iter().map(|e| e.amount).sum())
    }

    /// Drop all memory entries, keeping the active list, and persist
    pub fn clear_memory(&self) -> SpendlogResult<usize> {
        let dropped = self.storage.expenses.clear_memory()?;
        self.storage.expenses.save(ExpenseList::Memory)?;
        log::info!("Cleared {} memory entries", dropped);
        Ok(dropped)
    }
}

fn validate_amount(amount: Money) -> SpendlogResult<()> {
    if !amount.is_positive() {
        return Err(SpendlogError::Validation(format!(
            "Amount must be positive, got {}",
            amount
        )));
    }
    Ok(())
}

fn validate_description(description: &str) -> SpendlogResult<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(SpendlogError::Validation(
            "Description cannot be empty".into(),
        ));
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(SpendlogError::Validation(format!(
            "Description is longer than {} characters",
            MAX_DESCRIPTION_LEN
        )));
    }
    Ok(trimmed.to_string())
}

fn validate_category(registry: &LabelRegistry, category: usize) -> SpendlogResult<()> {
    if !registry.contains_index(category) {
        return Err(SpendlogError::Validation(format!(
            "Category index {} is out of range (registry has {} labels)",
            category,
            registry.len()
        )));
    }
    Ok(())
}

fn validate_payment_method(payment_method: usize) -> SpendlogResult<()> {
    if payment_method >= PAYMENT_METHODS.len() {
        return Err(SpendlogError::Validation(format!(
            "Payment method index {} is out of range ({} methods)",
            payment_method,
            PAYMENT_METHODS.len()
        )));
    }
    Ok(())
}
