//! Expense display formatting
//!
//! Formats expense lists for terminal display. The list view shows at most
//! 20 rows, newest first, matching what fits comfortably on one screen.

use crate::models::{Expense, LabelRegistry};

/// Maximum rows shown by the list view
const LIST_LIMIT: usize = 20;

/// Format a numbered expense table, newest first
pub fn format_expense_table(
    expenses: &[Expense],
    categories: &LabelRegistry,
    payment_methods: &[&str],
) -> String {
    if expenses.is_empty() {
        return "No expenses to display.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5} {:<10} {:<25} {:<16} {:<8} {:<10}\n",
        "No.", "Amount", "Description", "Category", "Payment", "Date"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for (i, expense) in expenses.iter().take(LIST_LIMIT).enumerate() {
        output.push_str(&format!(
            "{:<5} {:<10} {:<25} {:<16} {:<8} {:<10}\n",
            i + 1,
            expense.amount.to_plain_string(),
            truncate(&expense.description, 25),
            truncate(categories.get(expense.category).unwrap_or("Unknown"), 16),
            payment_methods
                .get(expense.payment_method)
                .copied()
                .unwrap_or("Unknown"),
            expense.date.format("%d-%m-%Y")
        ));
    }
    output.push_str(&"-".repeat(80));
    output.push('\n');

    if expenses.len() > LIST_LIMIT {
        output.push_str(&format!(
            "... and {} more entries\n",
            expenses.len() - LIST_LIMIT
        ));
    }

    output
}

/// Format one expense with its labels resolved, one field per line
pub fn format_expense_details(
    expense: &Expense,
    categories: &LabelRegistry,
    payment_methods: &[&str],
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Amount:         {}\n", expense.amount));
    output.push_str(&format!("Description:    {}\n", expense.description));
    output.push_str(&format!(
        "Category:       {}\n",
        categories.get(expense.category).unwrap_or("Unknown")
    ));
    output.push_str(&format!(
        "Payment Method: {}\n",
        payment_methods
            .get(expense.payment_method)
            .copied()
            .unwrap_or("Unknown")
    ));
    output.push_str(&format!("Date:           {}\n", expense.date.format("%d-%m-%Y")));
    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PAYMENT_METHODS};
    use chrono::NaiveDate;

    fn expense(desc: &str) -> Expense {
        Expense::new(
            Money::from_cents(5_000),
            desc,
            1,
            2,
            NaiveDate::from_ymd_opt(2024, 3, 10)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_empty_list() {
        let registry = LabelRegistry::with_defaults();
        assert_eq!(
            format_expense_table(&[], &registry, &PAYMENT_METHODS),
            "No expenses to display.\n"
        );
    }

    #[test]
    fn test_table_resolves_labels() {
        let registry = LabelRegistry::with_defaults();
        let output = format_expense_table(&[expense("bus pass")], &registry, &PAYMENT_METHODS);

        assert!(output.contains("bus pass"));
        assert!(output.contains("Transport"));
        assert!(output.contains("Card"));
        assert!(output.contains("10-03-2024"));
    }

    #[test]
    fn test_table_caps_rows() {
        let registry = LabelRegistry::with_defaults();
        let expenses: Vec<Expense> = (0..25).map(|i| expense(&format!("e{}", i))).collect();

        let output = format_expense_table(&expenses, &registry, &PAYMENT_METHODS);
        assert!(output.contains("e19"));
        assert!(!output.contains("e20 "));
        assert!(output.contains("... and 5 more entries"));
    }

    #[test]
    fn test_details() {
        let registry = LabelRegistry::with_defaults();
        let output = format_expense_details(&expense("bus pass"), &registry, &PAYMENT_METHODS);
        assert!(output.contains("Amount:         50.00"));
        assert!(output.contains("Category:       Transport"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 8), "a longer");
    }
}
