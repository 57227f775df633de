//! Spending-limit periods
//!
//! A closed set of period kinds (daily, monthly, yearly) and a per-period
//! amount table used both for configured limits and for current-period totals.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::LedgerError;

/// The period a spending limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Daily,
    Monthly,
    Yearly,
}

impl PeriodKind {
    /// Every period kind, in report order
    pub const ALL: [PeriodKind; 3] = [PeriodKind::Daily, PeriodKind::Monthly, PeriodKind::Yearly];

    /// The lowercase name used on disk and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Capitalized label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Check whether `date` falls in the current period as of `today`
    ///
    /// Monthly matching compares the month number only, so the same month of
    /// any year counts toward the current month.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Daily => date == today,
            Self::Monthly => date.month() == today.month(),
            Self::Yearly => date.year() == today.year(),
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(LedgerError::InvalidPeriodKind(s.trim().to_string())),
        }
    }
}

/// One amount per period kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodAmounts {
    #[serde(default)]
    pub daily: Money,
    #[serde(default)]
    pub monthly: Money,
    #[serde(default)]
    pub yearly: Money,
}

impl PeriodAmounts {
    /// Get the amount for a period
    pub fn get(&self, kind: PeriodKind) -> Money {
        match kind {
            PeriodKind::Daily => self.daily,
            PeriodKind::Monthly => self.monthly,
            PeriodKind::Yearly => self.yearly,
        }
    }

    /// Replace the amount for a period
    pub fn set(&mut self, kind: PeriodKind, amount: Money) {
        match kind {
            PeriodKind::Daily => self.daily = amount,
            PeriodKind::Monthly => self.monthly = amount,
            PeriodKind::Yearly => self.yearly = amount,
        }
    }

    /// Add to the amount for a period, returning the new amount
    ///
    /// Returns `None` and leaves the amount unchanged on overflow.
    pub fn add(&mut self, kind: PeriodKind, amount: Money) -> Option<Money> {
        let total = self.get(kind).checked_add(amount)?;
        self.set(kind, total);
        Some(total)
    }

    /// Iterate `(kind, amount)` pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (PeriodKind, Money)> + '_ {
        PeriodKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
