//! Spending limit CLI commands

use clap::Subcommand;

use super::{parse_amount, print_storage_warning};
use crate::config::settings::Settings;
use crate::display::format_limit_line;
use crate::error::LedgerResult;
use crate::services::LedgerStore;

/// Spending limit subcommands
#[derive(Subcommand)]
pub enum LimitCommands {
    /// Set the limit for a period (0 clears it)
    Set {
        /// Period: daily, monthly, or yearly
        period: String,

        /// Limit amount
        amount: String,
    },

    /// Show each limit against current spending
    Show,
}

/// Handle a limit command
pub fn handle_limit_command(
    store: &mut LedgerStore,
    settings: &Settings,
    cmd: LimitCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        LimitCommands::Set { period, amount } => {
            let amount = parse_amount(&amount)?;
            store.set_spending_limit(&period, amount)?;
            println!(
                "{} spending limit set to {}",
                period.trim().to_lowercase(),
                amount.format_with_symbol(symbol)
            );
            print_storage_warning(store);
        }
        LimitCommands::Show => {
            let report = store.generate_report()?;
            println!("Spending Limits:");
            for status in report.limit_statuses() {
                println!("{}", format_limit_line(&status, symbol));
            }
        }
    }

    Ok(())
}
