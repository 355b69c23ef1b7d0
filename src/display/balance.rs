//! Balance display formatting

use crate::models::{AccountKind, BalanceEntry, Money};

/// Format an account's current balance and snapshot history
pub fn format_balance_history(
    account: AccountKind,
    current: Money,
    history: &[BalanceEntry],
) -> String {
    let mut output = String::new();
    output.push_str(&format!("--- {} Balance History ---\n", account));
    output.push_str(&format!("Current balance: {}\n", current));

    if history.is_empty() {
        output.push_str("No history available.\n");
        return output;
    }

    for (i, entry) in history.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} on {}\n",
            i + 1,
            entry.amount,
            entry.recorded_at.format("%d-%m-%Y")
        ));
    }

    output
}
