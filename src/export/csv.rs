//! CSV Export functionality
//!
//! Exports expenses to CSV format, one row per expense in ledger order.

use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseRecord;

/// Header row of the expense export
pub const EXPENSE_HEADER: [&str; 5] = ["ID", "Amount", "Category", "Date", "Description"];

/// Default export file name for an export made on `date`
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("expenses_{}.csv", date.format("%Y%m%d"))
}

/// Write expenses as CSV, returning the number of rows written
pub fn export_expenses_csv<W: Write>(
    expenses: &[ExpenseRecord],
    writer: W,
) -> LedgerResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(EXPENSE_HEADER)?;

    for expense in expenses {
        csv_writer.write_record([
            expense.id.to_string(),
            expense.amount.to_decimal_string(),
            expense.category.clone(),
            expense.date.clone(),
            expense.description.clone(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(expenses.len())
}

/// Export expenses to a file
///
/// With no explicit target the file goes to `default_dir` under
/// [`default_export_filename`] for `today`. Returns the path written.
pub fn export_expenses_to_file(
    expenses: &[ExpenseRecord],
    target: Option<&Path>,
    default_dir: &Path,
    today: NaiveDate,
) -> LedgerResult<PathBuf> {
    let path = match target {
        Some(path) => path.to_path_buf(),
        None => default_dir.join(default_export_filename(today)),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(&path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    export_expenses_csv(expenses, BufWriter::new(file))?;
    Ok(path)
}
