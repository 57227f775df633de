//! Reports module for the expense ledger
//!
//! Provides the expense report with category breakdown, remaining budget and
//! spending-limit evaluation.

pub mod expense_report;

pub use expense_report::{category_totals, period_totals, ExpenseReport, LimitStatus};
