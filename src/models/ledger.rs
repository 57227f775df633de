//! Ledger state model
//!
//! The whole persisted ledger: expenses in insertion order, income, spending
//! limits, and the id counter.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

use super::expense::ExpenseRecord;
use super::ids::ExpenseId;
use super::money::Money;
use super::period::PeriodAmounts;

/// Everything the ledger file holds
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LedgerState {
    /// Expense records in insertion order
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,

    /// Total income
    #[serde(default)]
    pub income: Money,

    /// Spending limit per period kind (zero means unset)
    #[serde(default)]
    pub spending_limits: PeriodAmounts,

    /// Next id to hand out
    #[serde(default)]
    pub next_id: u64,
}

impl LedgerState {
    /// Bring the id counter past every stored id
    ///
    /// Files written by older versions have no counter, and a hand-edited file
    /// may carry a stale one.
    pub fn normalize_next_id(&mut self) {
        let past_max = self
            .expenses
            .iter()
            .map(|e| e.id.value().saturating_add(1))
            .max()
            .unwrap_or(1);
        self.next_id = self.next_id.max(past_max).max(1);
    }

    /// Take the next id and advance the counter
    pub fn allocate_id(&mut self) -> ExpenseId {
        self.normalize_next_id();
        let id = ExpenseId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Find an expense by id
    pub fn find(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Find an expense by id for modification
    pub fn find_mut(&mut self, id: ExpenseId) -> Option<&mut ExpenseRecord> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    /// Sum of every expense amount
    ///
    /// Fails with `MalformedData` when the sum leaves the supported range.
    pub fn total_expenses(&self) -> LedgerResult<Money> {
        self.expenses
            .iter()
            .try_fold(Money::zero(), |total, e| total.checked_add(e.amount))
            .ok_or_else(|| {
                LedgerError::MalformedData("total of all expenses is out of range".into())
            })
    }
}
