//! Balance snapshot model
//!
//! Each balance update appends a timestamped snapshot to the per-account
//! history, which is capped by dropping the oldest entries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Maximum number of balance snapshots retained per account
pub const MAX_BALANCE_HISTORY: usize = 100;

/// The two tracked accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// The bank account
    Bank,
    /// Cash on hand
    Cash,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bank => write!(f, "Bank"),
            Self::Cash => write!(f, "Cash"),
        }
    }
}

impl std::str::FromStr for AccountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bank" => Ok(Self::Bank),
            "cash" => Ok(Self::Cash),
            other => Err(format!("Unknown account '{}', expected bank or cash", other)),
        }
    }
}

/// A timestamped recorded balance value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// The recorded balance
    pub amount: Money,

    /// When the balance was recorded
    pub recorded_at: NaiveDateTime,
}

impl BalanceEntry {
    /// Create a new balance snapshot
    pub fn new(amount: Money, recorded_at: NaiveDateTime) -> Self {
        Self {
            amount,
            recorded_at,
        }
    }
}
