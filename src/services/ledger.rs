//! Ledger store
//!
//! Owns the in-memory ledger and its durable file. Every mutating method
//! validates first, applies the change, then writes the whole ledger before
//! returning. A failed write does not undo the change: it is logged and kept
//! as a pending storage warning for the caller to surface.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::expense::{validate_amount, validate_category};
use crate::models::{
    ExpenseId, ExpenseRecord, ExpenseUpdate, LedgerState, Money, PeriodAmounts, PeriodKind,
};
use crate::reports::{category_totals, ExpenseReport};
use crate::storage::LedgerFile;

/// The expense ledger and its persistence
pub struct LedgerStore {
    file: LedgerFile,
    state: LedgerState,
    storage_warning: Option<LedgerError>,
}

impl LedgerStore {
    /// Open the ledger at `path`, starting empty if it is missing or corrupt
    pub fn open(path: impl AsRef<Path>) -> Self {
        let file = LedgerFile::new(path.as_ref());
        let state = file.load();
        Self {
            file,
            state,
            storage_warning: None,
        }
    }

    /// Open the ledger file named by the configured paths
    pub fn from_paths(paths: &LedgerPaths) -> Self {
        Self::open(paths.ledger_file())
    }

    /// Path of the durable ledger file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// The current in-memory ledger
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Write the full ledger now
    pub fn persist(&self) -> LedgerResult<()> {
        self.file.save(&self.state)
    }

    /// Take the warning left by the most recent failed write, if any
    pub fn take_storage_warning(&mut self) -> Option<LedgerError> {
        self.storage_warning.take()
    }

    fn flush(&mut self) {
        match self.persist() {
            Ok(()) => self.storage_warning = None,
            Err(e) => {
                warn!(
                    path = %self.file.path().display(),
                    error = %e,
                    "ledger change kept in memory but not saved"
                );
                self.storage_warning = Some(e);
            }
        }
    }

    /// Record a new expense
    ///
    /// `date` defaults to today's local date. The ledger is written before
    /// this returns.
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: &str,
        date: Option<NaiveDate>,
        description: Option<&str>,
    ) -> LedgerResult<ExpenseRecord> {
        validate_amount(amount)?;
        validate_category(category)?;

        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let id = self.state.allocate_id();
        let record = ExpenseRecord::new(id, amount, category, date, description.unwrap_or(""));

        self.state.expenses.push(record.clone());
        info!(id = %record.id, amount = %record.amount, category = %record.category, "expense added");
        self.flush();

        Ok(record)
    }

    /// Apply the supplied fields of `update` to an expense
    ///
    /// Nothing changes if the expense is missing or a supplied field is
    /// invalid. The ledger is written before this returns.
    pub fn edit_expense(
        &mut self,
        id: ExpenseId,
        update: &ExpenseUpdate,
    ) -> LedgerResult<ExpenseRecord> {
        update.validate()?;

        let record = self
            .state
            .find_mut(id)
            .ok_or_else(|| LedgerError::expense_not_found(id))?;
        record.apply(update);
        let updated = record.clone();

        info!(id = %id, "expense edited");
        self.flush();

        Ok(updated)
    }

    /// Remove every expense with `id`, returning how many were removed
    ///
    /// Removing an unknown id is a no-op. The ledger is written before this
    /// returns.
    pub fn delete_expense(&mut self, id: ExpenseId) -> usize {
        let before = self.state.expenses.len();
        self.state.expenses.retain(|e| e.id != id);
        let removed = before - self.state.expenses.len();

        info!(id = %id, removed, "expense deleted");
        self.flush();

        removed
    }

    /// Replace the income. The ledger is written before this returns.
    pub fn set_income(&mut self, amount: Money) -> LedgerResult<()> {
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(format!(
                "Income cannot be negative (got {})",
                amount
            )));
        }

        self.state.income = amount;
        info!(income = %amount, "income set");
        self.flush();

        Ok(())
    }

    /// Replace the limit for a period named by text (`daily`, `monthly`, `yearly`)
    pub fn set_spending_limit(&mut self, period: &str, amount: Money) -> LedgerResult<()> {
        let kind: PeriodKind = period.parse()?;
        self.set_limit(kind, amount)
    }

    /// Replace the limit for a period. The ledger is written before this returns.
    pub fn set_limit(&mut self, kind: PeriodKind, amount: Money) -> LedgerResult<()> {
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(format!(
                "Spending limit cannot be negative (got {})",
                amount
            )));
        }

        self.state.spending_limits.set(kind, amount);
        info!(period = %kind, limit = %amount, "spending limit set");
        self.flush();

        Ok(())
    }

    /// All expenses in ledger order
    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.state.expenses
    }

    /// Look up one expense
    pub fn get_expense(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.state.find(id)
    }

    pub fn income(&self) -> Money {
        self.state.income
    }

    pub fn spending_limits(&self) -> PeriodAmounts {
        self.state.spending_limits
    }

    /// Totals per category over all expenses
    pub fn aggregate_by_category(&self) -> LedgerResult<BTreeMap<String, Money>> {
        category_totals(&self.state.expenses)
    }

    /// Report as of today's local date
    pub fn generate_report(&self) -> LedgerResult<ExpenseReport> {
        self.generate_report_on(Local::now().date_naive())
    }

    /// Report with current periods evaluated against `today`
    pub fn generate_report_on(&self, today: NaiveDate) -> LedgerResult<ExpenseReport> {
        ExpenseReport::generate(&self.state, today)
    }
}
