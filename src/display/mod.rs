//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display:
//! the expense table, the text report, and the category chart.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_table};
pub use report::{format_category_chart, format_limit_line, format_report};
