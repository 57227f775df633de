//! Export module for the expense ledger
//!
//! - CSV: expense rows for spreadsheets
//! - JSON: the full expense report, for other tools

pub mod csv;
pub mod json;

pub use self::csv::{
    default_export_filename, export_expenses_csv, export_expenses_to_file, EXPENSE_HEADER,
};
pub use self::json::export_report_json;
