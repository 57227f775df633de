//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger store.

pub mod expense;
pub mod export;
pub mod income;
pub mod limit;
pub mod menu;
pub mod report;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::expense::DATE_FORMAT;
use crate::models::{ExpenseId, Money};
use crate::services::LedgerStore;

pub use expense::{
    handle_add_command, handle_delete_command, handle_edit_command, handle_list_command, AddArgs,
    EditArgs,
};
pub use export::handle_export_command;
pub use income::{handle_income_command, IncomeCommands};
pub use limit::{handle_limit_command, LimitCommands};
pub use menu::run_menu;
pub use report::{handle_chart_command, handle_report_command};

/// Parse a user-entered amount such as `12`, `12.5` or `$12.50`
pub fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| LedgerError::InvalidAmount(e.to_string()))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        LedgerError::InvalidInput(format!("Invalid date '{}', expected YYYY-MM-DD", input))
    })
}

/// Parse an expense id
pub fn parse_id(input: &str) -> LedgerResult<ExpenseId> {
    input
        .parse()
        .map_err(|_| LedgerError::InvalidInput(format!("Invalid expense id '{}'", input.trim())))
}

/// Print the warning left by a failed save, if any
pub(crate) fn print_storage_warning(store: &mut LedgerStore) {
    if let Some(warning) = store.take_storage_warning() {
        eprintln!("Warning: {}. The change was not saved.", warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$12.50").unwrap(), Money::from_cents(1250));
        assert!(matches!(
            parse_amount("twelve"),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2025-02-28 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(matches!(
            parse_date("28/02/2025"),
            Err(LedgerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("#7").unwrap(), ExpenseId::new(7));
        assert!(parse_id("seven").is_err());
    }
}
