//! Income CLI commands

use clap::Subcommand;

use super::{parse_amount, print_storage_warning};
use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::services::LedgerStore;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Replace the recorded income
    Set {
        /// Income amount (e.g., "5000" or "5000.00")
        amount: String,
    },

    /// Show the recorded income and what is left after expenses
    Show,
}

/// Handle an income command
pub fn handle_income_command(
    store: &mut LedgerStore,
    settings: &Settings,
    cmd: IncomeCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            store.set_income(amount)?;
            println!("Income set to {}", amount.format_with_symbol(symbol));
            print_storage_warning(store);
        }
        IncomeCommands::Show => {
            let income = store.income();
            let spent = store.state().total_expenses()?;
            println!("Income:    {:>12}", income.format_with_symbol(symbol));
            println!("Expenses:  {:>12}", spent.format_with_symbol(symbol));
            println!(
                "Remaining: {:>12}",
                income.saturating_sub(spent).format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
