//! Expense Report
//!
//! Totals, per-category breakdown, remaining budget, and current-period spend
//! compared against the configured limits.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseRecord, LedgerState, Money, PeriodAmounts, PeriodKind};

fn out_of_range(what: &str) -> LedgerError {
    LedgerError::MalformedData(format!("{} is out of range", what))
}

/// Sum expense amounts grouped by category label
///
/// Fails with `MalformedData` if any total, or the sum of all of them, leaves
/// the supported range.
pub fn category_totals(expenses: &[ExpenseRecord]) -> LedgerResult<BTreeMap<String, Money>> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    let mut grand_total = Money::zero();
    for expense in expenses {
        grand_total = grand_total
            .checked_add(expense.amount)
            .ok_or_else(|| out_of_range("total of all expenses"))?;
        let entry = totals.entry(expense.category.clone()).or_default();
        *entry = entry
            .checked_add(expense.amount)
            .ok_or_else(|| out_of_range("category total"))?;
    }
    Ok(totals)
}

/// Sum expense amounts falling in the current daily, monthly and yearly period
///
/// Every stored date is parsed strictly; one bad date fails the whole sum.
pub fn period_totals(expenses: &[ExpenseRecord], today: NaiveDate) -> LedgerResult<PeriodAmounts> {
    let mut totals = PeriodAmounts::default();
    for expense in expenses {
        let date = expense.parsed_date()?;
        for kind in PeriodKind::ALL {
            if kind.contains(date, today) {
                totals
                    .add(kind, expense.amount)
                    .ok_or_else(|| out_of_range("current period total"))?;
            }
        }
    }
    Ok(totals)
}

/// Current spend against one configured limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitStatus {
    pub period: PeriodKind,
    pub limit: Money,
    pub spent: Money,
    /// `limit - spent` (saturating); negative once the limit is exceeded
    pub remaining: Money,
    pub exceeded: bool,
}

impl LimitStatus {
    /// A zero limit means no limit has been configured
    pub fn is_set(&self) -> bool {
        !self.limit.is_zero()
    }
}

/// Full expense report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseReport {
    /// Date the current periods were evaluated against
    pub generated_on: NaiveDate,
    /// Sum of every expense
    pub total_expenses: Money,
    /// Totals per category
    pub category_breakdown: BTreeMap<String, Money>,
    /// Configured income
    pub income: Money,
    /// `income - total_expenses`, not clamped at zero
    pub remaining_budget: Money,
    /// Configured limits
    pub spending_limits: PeriodAmounts,
    /// Spend in the current day, month and year
    pub current_expenses: PeriodAmounts,
}

impl ExpenseReport {
    /// Generate a report for the ledger as of `today`
    pub fn generate(state: &LedgerState, today: NaiveDate) -> LedgerResult<Self> {
        let current_expenses = period_totals(&state.expenses, today)?;
        let total_expenses = state.total_expenses()?;
        let remaining_budget = state
            .income
            .checked_sub(total_expenses)
            .ok_or_else(|| out_of_range("remaining budget"))?;

        Ok(Self {
            generated_on: today,
            total_expenses,
            category_breakdown: category_totals(&state.expenses)?,
            income: state.income,
            remaining_budget,
            spending_limits: state.spending_limits,
            current_expenses,
        })
    }

    /// Compare each period's spend with its limit
    pub fn limit_statuses(&self) -> Vec<LimitStatus> {
        self.spending_limits
            .iter()
            .map(|(period, limit)| {
                let spent = self.current_expenses.get(period);
                LimitStatus {
                    period,
                    limit,
                    spent,
                    remaining: limit.saturating_sub(spent),
                    exceeded: !limit.is_zero() && spent > limit,
                }
            })
            .collect()
    }

    /// Limits whose current spend is over the configured amount
    pub fn exceeded_limits(&self) -> Vec<LimitStatus> {
        self.limit_statuses()
            .into_iter()
            .filter(|s| s.exceeded)
            .collect()
    }
}
