//! Storage layer for the expense ledger
//!
//! The whole ledger lives in one JSON document that is rewritten atomically
//! after every change.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::LedgerError;
use crate::models::LedgerState;

/// Repository for the durable ledger file
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    /// Create a repository for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger, falling back to an empty one
    ///
    /// A missing, unreadable or structurally invalid file never fails
    /// startup; it is treated as "no prior data".
    pub fn load(&self) -> LedgerState {
        match read_json::<LedgerState, _>(&self.path) {
            Ok(mut state) => {
                state.normalize_next_id();
                for record in &state.expenses {
                    if let Err(e) = record.validate() {
                        warn!(id = %record.id, error = %e, "stored expense fails validation");
                    }
                }
                debug!(
                    path = %self.path.display(),
                    expenses = state.expenses.len(),
                    "loaded ledger"
                );
                state
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ledger file unreadable, starting with an empty ledger"
                );
                LedgerState::default()
            }
        }
    }

    /// Write the full ledger, replacing prior content
    pub fn save(&self, state: &LedgerState) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, state)?;
        debug!(
            path = %self.path.display(),
            expenses = state.expenses.len(),
            "saved ledger"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, ExpenseRecord, Money, PeriodKind};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn populated_state() -> LedgerState {
        let mut state = LedgerState::default();
        for (cents, category) in [(1000, "food"), (2050, "rent")] {
            let id = state.allocate_id();
            state.expenses.push(ExpenseRecord::new(
                id,
                Money::from_cents(cents),
                category,
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                "",
            ));
        }
        state.income = Money::from_cents(100000);
        state
            .spending_limits
            .set(PeriodKind::Monthly, Money::from_cents(50000));
        state
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerFile::new(temp_dir.path().join("expenses.json"));

        let state = repo.load();
        assert!(state.expenses.is_empty());
        assert!(state.income.is_zero());
        assert!(state.spending_limits.iter().all(|(_, m)| m.is_zero()));
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "{\"expenses\": [ {\"id\": ").unwrap();

        let state = LedgerFile::new(&path).load();
        assert!(state.expenses.is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let state = LedgerFile::new(&path).load();
        assert_eq!(state.expenses.len(), 0);
    }

    #[test]
    fn test_load_out_of_range_amount_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(
            &path,
            r#"{"expenses": [
                {"id": 1, "amount": 1e17, "category": "a", "date": "2025-01-01"},
                {"id": 2, "amount": 1e17, "category": "a", "date": "2025-01-01"}
            ]}"#,
        )
        .unwrap();

        let state = LedgerFile::new(&path).load();
        assert!(state.expenses.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerFile::new(temp_dir.path().join("expenses.json"));
        let state = populated_state();

        repo.save(&state).unwrap();
        let loaded = repo.load();

        assert_eq!(loaded, state);
        assert_eq!(loaded.expenses[1].id, ExpenseId::new(2));
    }

    #[test]
    fn test_saved_document_shape() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        LedgerFile::new(&path).save(&populated_state()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["expenses"][0]["amount"], 10.0);
        assert_eq!(raw["expenses"][1]["date"], "2025-01-15");
        assert_eq!(raw["income"], 1000.0);
        assert_eq!(raw["spending_limits"]["monthly"], 500.0);
        assert_eq!(raw["next_id"], 3);
    }
}
