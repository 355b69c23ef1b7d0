//! Balance CLI commands

use clap::Subcommand;

use crate::display::format_balance_history;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::AccountKind;
use crate::services::BalanceService;
use crate::storage::Storage;

use super::expense::parse_amount;

/// Balance subcommands
#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Set the current balance for an account
    Set {
        /// Account: bank or cash
        account: AccountKind,
        /// New balance (e.g. "1500" or "1500.75")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show an account's balance history
    History {
        /// Account: bank or cash
        account: AccountKind,
    },
}

/// Handle a balance command
pub fn handle_balance_command(storage: &Storage, cmd: BalanceCommands) -> SpendlogResult<()> {
    let service = BalanceService::new(storage);

    match cmd {
        BalanceCommands::Set { account, amount } => {
            let amount = parse_amount(&amount)?;
            if amount.is_negative() {
                return Err(SpendlogError::Validation(
                    "Balance cannot be negative".into(),
                ));
            }
            service.update(account, amount)?;
            println!("{} balance updated to {}.", account, amount);
        }

        BalanceCommands::History { account } => {
            let current = service.current(account)?;
            let history = service.history(account)?;
            print!("{}", format_balance_history(account, current, &history));
        }
    }

    Ok(())
}
