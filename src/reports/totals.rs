//! Aggregation over expense record sets
//!
//! Grouped sums come back as dense arrays sized to the registry, so index i
//! of the result is the total for label i. Zero entries stay in the array;
//! presentation layers decide whether to show them.

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, Money};

/// Sum amounts grouped by category index
pub fn by_category(records: &[Expense], registry_len: usize) -> Vec<Money> {
    sum_by(records, registry_len, |e| e.category)
}

/// Sum amounts grouped by payment-method index
pub fn by_payment_method(records: &[Expense], method_count: usize) -> Vec<Money> {
    sum_by(records, method_count, |e| e.payment_method)
}

fn sum_by(records: &[Expense], len: usize, index: impl Fn(&Expense) -> usize) -> Vec<Money> {
    let mut totals = vec![Money::zero(); len];
    for record in records {
        // Indexes past the registry are skipped rather than panicking
        if let Some(slot) = totals.get_mut(index(record)) {
            *slot += record.amount;
        }
    }
    totals
}

/// Sum of all record amounts
pub fn total(records: &[Expense]) -> Money {
    records.iter().map(|e| e.amount).sum()
}

/// Share of `part` in `total` as a percentage; 0 when the total is zero
pub fn percentage(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.cents() as f64 / total.cents() as f64 * 100.0
    }
}

/// The record with the maximum amount
///
/// Ties resolve to the first-encountered record in iteration order.
pub fn highest(records: &[Expense]) -> SpendlogResult<&Expense> {
    records
        .iter()
        .reduce(|best, e| if e.amount > best.amount { e } else { best })
        .ok_or_else(|| SpendlogError::EmptySet("the record set is empty".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(cents: i64, category: usize, payment_method: usize) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            "x",
            category,
            payment_method,
            NaiveDate::from_ymd_opt(2024, 3, 10)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_by_category_dense() {
        let records = vec![expense(10_000, 0, 0), expense(20_000, 0, 1), expense(5_000, 1, 0)];

        let totals = by_category(&records, 3);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0], Money::from_cents(30_000));
        assert_eq!(totals[1], Money::from_cents(5_000));
        assert_eq!(totals[2], Money::zero());
    }

    #[test]
    fn test_grouped_sums_match_total() {
        let records = vec![
            expense(123, 0, 0),
            expense(456, 2, 1),
            expense(789, 1, 2),
            expense(1_000, 2, 1),
        ];

        let grouped: Money = by_category(&records, 3).into_iter().sum();
        assert_eq!(grouped, total(&records));

        let grouped: Money = by_payment_method(&records, 3).into_iter().sum();
        assert_eq!(grouped, total(&records));
    }

    #[test]
    fn test_highest() {
        let records = vec![expense(5_000, 0, 0), expense(12_000, 0, 0), expense(3_000, 0, 0)];
        assert_eq!(highest(&records).unwrap().amount, Money::from_cents(12_000));
    }

    #[test]
    fn test_highest_empty_set() {
        let err = highest(&[]).unwrap_err();
        assert!(err.is_empty_set());
    }

    #[test]
    fn test_highest_tie_takes_first() {
        let mut first = expense(500, 0, 0);
        first.description = "first".into();
        let mut second = expense(500, 1, 1);
        second.description = "second".into();

        let records = vec![first, second];
        assert_eq!(highest(&records).unwrap().description, "first");
    }

    #[test]
    fn test_percentage() {
        assert!((percentage(Money::from_cents(30_000), Money::from_cents(35_000)) - 85.714).abs() < 0.001);
        assert_eq!(percentage(Money::from_cents(100), Money::zero()), 0.0);
    }

    #[test]
    fn test_march_2024_scenario() {
        // Amounts 100, 200, 50 under categories 0, 0, 1
        let records = vec![
            expense(10_000, 0, 0),
            expense(20_000, 0, 0),
            expense(5_000, 1, 0),
        ];

        let totals = by_category(&records, 11);
        assert_eq!(totals[0], Money::from_cents(30_000));
        assert_eq!(totals[1], Money::from_cents(5_000));
        assert_eq!(total(&records), Money::from_cents(35_000));

        let pct = percentage(totals[0], total(&records));
        assert!((pct - 85.71).abs() < 0.01);
    }
}
