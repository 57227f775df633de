//! Expense Ledger - a personal expense tracker for the terminal
//!
//! Records expenses, an income figure and daily/monthly/yearly spending
//! limits in a single JSON file, and reports totals, category breakdowns and
//! limit overruns.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, periods, ledger state)
//! - `storage`: JSON file storage layer
//! - `services`: The ledger store, which validates and persists mutations
//! - `reports`: Aggregation and limit evaluation
//! - `export`: CSV and JSON export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::{LedgerStore, Money};
//!
//! let mut store = LedgerStore::open("expenses.json");
//! store.add_expense(Money::from_cents(1250), "food", None, Some("lunch"))?;
//! let report = store.generate_report()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use models::{ExpenseId, ExpenseRecord, ExpenseUpdate, Money, PeriodKind};
pub use services::LedgerStore;
