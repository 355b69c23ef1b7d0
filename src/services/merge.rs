//! Merged view of the active and memory lists
//!
//! Records are added to both lists on creation, so the memory usually still
//! holds a copy of everything in the active list. Reporting works over the
//! de-duplicated union: all active records, plus the memory records that
//! duplicate no active record by full-field equality.

use crate::models::Expense;

/// Build the de-duplicated logical union of the two lists
///
/// The result is the active list in order, followed by memory entries that
/// equal no active entry. Pure projection, recomputed per call; the
/// quadratic equality scan is fine at the bounded list sizes.
pub fn merged_view(active: &[Expense], memory: &[Expense]) -> Vec<Expense> {
    let mut merged: Vec<Expense> = active.to_vec();
    merged.extend(
        memory
            .iter()
            .filter(|m| !active.iter().any(|a| a == *m))
            .cloned(),
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense(cents: i64, desc: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            desc,
            0,
            0,
            NaiveDate::from_ymd_opt(2024, 3, 10)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_duplicates_counted_once() {
        let shared = expense(100, "shared");
        let active = vec![shared.clone(), expense(200, "active only")];
        let memory = vec![shared.clone(), expense(300, "memory only")];

        let merged = merged_view(&active, &memory);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.iter().filter(|e| **e == shared).count(), 1);
    }

    #[test]
    fn test_active_comes_first() {
        let active = vec![expense(100, "a")];
        let memory = vec![expense(200, "m")];

        let merged = merged_view(&active, &memory);
        assert_eq!(merged[0].description, "a");
        assert_eq!(merged[1].description, "m");
    }

    #[test]
    fn test_size_bound() {
        let shared = expense(100, "shared");
        let active = vec![shared.clone()];
        let memory = vec![shared.clone()];
        assert_eq!(merged_view(&active, &memory).len(), 1);

        // No overlap: sizes add up exactly
        let disjoint_memory = vec![expense(200, "other")];
        assert_eq!(merged_view(&active, &disjoint_memory).len(), 2);
    }

    #[test]
    fn test_near_duplicates_are_distinct() {
        let a = expense(100, "almost");
        let mut b = a.clone();
        b.payment_method = 1;

        let merged = merged_view(&[a], &[b]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merged_view(&[], &[]).is_empty());

        let memory = vec![expense(100, "m")];
        assert_eq!(merged_view(&[], &memory).len(), 1);
    }
}
