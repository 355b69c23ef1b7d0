//! Summary and budget report formatting

use crate::models::{LabelRegistry, Money};
use crate::reports::{totals, BudgetReport, BudgetStatus};

/// Format per-category totals with percentages, zero rows omitted
pub fn format_category_summary(
    period_label: &str,
    category_totals: &[Money],
    categories: &LabelRegistry,
) -> String {
    let total: Money = category_totals.iter().copied().sum();

    let mut output = String::new();
    output.push_str(&format!("--- Category Summary for {} ---\n", period_label));
    output.push_str(&format!("{:<20} {:<15} {:<10}\n", "Category", "Total", "%"));
    output.push_str(&"-".repeat(45));
    output.push('\n');

    for (i, amount) in category_totals.iter().enumerate() {
        if amount.is_positive() {
            output.push_str(&format!(
                "{:<20} {:<15} {:>6.2}%\n",
                categories.get(i).unwrap_or("Unknown"),
                amount.to_plain_string(),
                totals::percentage(*amount, total)
            ));
        }
    }

    output.push_str(&"-".repeat(45));
    output.push('\n');
    output.push_str(&format!(
        "{:<20} {:<15} {:>6.2}%\n",
        "TOTAL",
        total.to_plain_string(),
        100.0
    ));
    output
}

/// Format a budget analysis with its status line
pub fn format_budget_report(period_label: &str, report: &BudgetReport) -> String {
    let mut output = String::new();
    output.push_str("--- Monthly Budget Analysis ---\n");
    output.push_str(&format!("Month: {}\n", period_label));
    output.push_str(&format!("Budget: {}\n", report.limit));
    output.push_str(&format!("Expenses: {}\n", report.spent));
    output.push_str(&format!("Remaining: {}\n", report.remaining));
    output.push_str(&format!("Percentage Used: {:.2}%\n", report.percent_used));

    match report.status {
        BudgetStatus::Exceeded => {
            output.push_str(&format!(
                "\nALERT: You have exceeded your monthly budget by {}!\n",
                report.spent - report.limit
            ));
        }
        BudgetStatus::Warning => {
            output.push_str(&format!(
                "\nWARNING: You have used {:.2}% of your budget. Be careful with your spending.\n",
                report.percent_used
            ));
        }
        BudgetStatus::Within => {
            output.push_str(&format!(
                "\nYou still have {:.2}% of your budget remaining.\n",
                100.0 - report.percent_used
            ));
        }
    }

    output
}
