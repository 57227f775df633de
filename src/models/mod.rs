//! Core data models for the expense ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: expenses, money, limit periods, and the persisted ledger state.

pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod period;

pub use expense::{ExpenseRecord, ExpenseUpdate, ExpenseValidationError};
pub use ids::ExpenseId;
pub use ledger::LedgerState;
pub use money::{Money, MoneyParseError};
pub use period::{PeriodAmounts, PeriodKind};
