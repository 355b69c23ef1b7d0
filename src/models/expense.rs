//! Expense record model
//!
//! An expense has no synthetic identifier: two records are the same record
//! exactly when every field matches. Duplicate detection between the active
//! list and the rolling memory relies on that full-field equality, so the
//! struct derives `PartialEq`/`Eq` and equality semantics are part of the
//! public contract.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Maximum length of an expense description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 50;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent (always positive)
    pub amount: Money,

    /// Free-text description, at most [`MAX_DESCRIPTION_LEN`] characters
    pub description: String,

    /// Index into the category registry, valid at creation time
    pub category: usize,

    /// Index into the payment-method list, valid at creation time
    pub payment_method: usize,

    /// When the expense happened, at second precision
    pub date: NaiveDateTime,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: usize,
        payment_method: usize,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category,
            payment_method,
            date,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%d-%m-%Y"),
            self.description,
            self.amount
        )
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: Money,
    pub description: String,
    pub category: usize,
    pub payment_method: usize,
    pub date: NaiveDateTime,
}

/// A partial update to an existing expense
///
/// Each field is independently optional; `None` leaves the current value
/// unchanged. Supplied fields are validated with the same rules as creation
/// before any of them are applied.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub category: Option<usize>,
    pub payment_method: Option<usize>,
    pub date: Option<NaiveDateTime>,
}

impl ExpenseUpdate {
    /// Check whether this update changes anything at all
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.payment_method.is_none()
            && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_full_field_equality() {
        let a = Expense::new(Money::from_cents(5000), "coffee", 0, 1, noon(2024, 3, 10));
        let b = a.clone();
        assert_eq!(a, b);

        let mut c = a.clone();
        c.amount = Money::from_cents(5001);
        assert_ne!(a, c);

        let mut d = a.clone();
        d.date = noon(2024, 3, 11);
        assert_ne!(a, d);
    }

    #[test]
    fn test_display() {
        let e = Expense::new(Money::from_cents(5000), "coffee", 0, 1, noon(2024, 3, 10));
        assert_eq!(format!("{}", e), "10-03-2024 coffee 50.00");
    }

    #[test]
    fn test_update_is_empty() {
        assert!(ExpenseUpdate::default().is_empty());

        let update = ExpenseUpdate {
            amount: Some(Money::from_cents(100)),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let e = Expense::new(Money::from_cents(5000), "coffee", 0, 1, noon(2024, 3, 10));
        let json = serde_json::to_string(&e).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
