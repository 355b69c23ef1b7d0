//! Date filters over expense record sets

use chrono::{Datelike, NaiveDateTime};

use crate::models::Expense;

/// Records whose date falls in the given calendar month and year
pub fn by_month(records: &[Expense], month: u32, year: i32) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| e.date.month() == month && e.date.year() == year)
        .cloned()
        .collect()
}

/// Records with date inclusive within `[start, end]`, at second precision
///
/// Callers wanting whole calendar days pass start at 00:00:00 and end at
/// 23:59:59.
pub fn by_date_range(records: &[Expense], start: NaiveDateTime, end: NaiveDateTime) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense_on(year: i32, month: u32, day: u32) -> Expense {
        Expense::new(
            Money::from_cents(100),
            format!("{}-{}-{}", year, month, day),
            0,
            0,
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_by_month() {
        let records = vec![
            expense_on(2024, 3, 1),
            expense_on(2024, 3, 31),
            expense_on(2024, 4, 1),
            expense_on(2023, 3, 15),
        ];

        let march = by_month(&records, 3, 2024);
        assert_eq!(march.len(), 2);
        assert!(march.iter().all(|e| e.date.month() == 3 && e.date.year() == 2024));
    }

    #[test]
    fn test_by_date_range_inclusive() {
        let records = vec![
            expense_on(2024, 3, 9),
            expense_on(2024, 3, 10),
            expense_on(2024, 3, 15),
            expense_on(2024, 3, 16),
        ];

        let start = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();

        let filtered = by_date_range(&records, start, end);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].description, "2024-3-10");
        assert_eq!(filtered[1].description, "2024-3-15");
    }

    #[test]
    fn test_by_date_range_boundary_seconds() {
        let at = |h: u32, m: u32, s: u32| {
            Expense::new(
                Money::from_cents(100),
                "x",
                0,
                0,
                NaiveDate::from_ymd_opt(2024, 3, 10)
                    .unwrap()
                    .and_hms_opt(h, m, s)
                    .unwrap(),
            )
        };
        let records = vec![at(0, 0, 0), at(23, 59, 59)];

        let start = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();

        assert_eq!(by_date_range(&records, start, end).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(by_month(&[], 3, 2024).is_empty());
    }
}
