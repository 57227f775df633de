//! Expense record model
//!
//! An expense is a positive amount spent in a free-form category on a given
//! calendar date. Dates are kept in their stored `YYYY-MM-DD` text form so a
//! hand-edited ledger file with a bad date still loads; the date is parsed
//! strictly when reports need it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::LedgerError;

/// Date format used for stored expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation errors for expense fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive (got {})", amount)
            }
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

impl From<ExpenseValidationError> for LedgerError {
    fn from(err: ExpenseValidationError) -> Self {
        match err {
            ExpenseValidationError::NonPositiveAmount(_) => Self::InvalidAmount(err.to_string()),
            ExpenseValidationError::EmptyCategory => Self::InvalidCategory(err.to_string()),
        }
    }
}

/// Check that an expense amount is strictly positive
pub fn validate_amount(amount: Money) -> Result<(), ExpenseValidationError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(ExpenseValidationError::NonPositiveAmount(amount))
    }
}

/// Check that a category label is non-empty
pub fn validate_category(category: &str) -> Result<(), ExpenseValidationError> {
    if category.trim().is_empty() {
        Err(ExpenseValidationError::EmptyCategory)
    } else {
        Ok(())
    }
}

/// Format a calendar date the way it is stored
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format a calendar date with a user-supplied strftime pattern
///
/// Returns `None` when the pattern is invalid or asks for fields a date does
/// not have (such as `%H`).
pub fn try_format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    use std::fmt::Write;

    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier, assigned once
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Free-form category label
    pub category: String,

    /// Calendar date as stored (`YYYY-MM-DD`)
    pub date: String,

    /// Optional description, empty when absent
    #[serde(default)]
    pub description: String,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        id: ExpenseId,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            category: category.into().trim().to_string(),
            date: format_date(date),
            description: description.into(),
        }
    }

    /// Parse the stored date strictly
    pub fn parsed_date(&self) -> Result<NaiveDate, LedgerError> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|e| {
            LedgerError::MalformedData(format!(
                "Expense {} has an invalid date '{}': {}",
                self.id, self.date, e
            ))
        })
    }

    /// Validate the record's own fields
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_amount(self.amount)?;
        validate_category(&self.category)
    }

    /// Apply a sparse update; fields absent from `update` keep their values
    ///
    /// Callers validate with [`ExpenseUpdate::validate`] first so that a bad
    /// update never partially applies.
    pub fn apply(&mut self, update: &ExpenseUpdate) {
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(category) = &update.category {
            self.category = category.trim().to_string();
        }
        if let Some(date) = update.date {
            self.date = format_date(date);
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
    }
}

/// Explicit optional-field update for an expense
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseUpdate {
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    /// An update that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check if no field is supplied
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.description.is_none()
    }

    /// Validate only the supplied fields
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        if let Some(category) = &self.category {
            validate_category(category)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExpenseRecord {
        ExpenseRecord::new(
            ExpenseId::new(1),
            Money::from_cents(1250),
            "food",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "lunch",
        )
    }

    #[test]
    fn test_try_format_date() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(try_format_date(day, "%d/%m/%Y").as_deref(), Some("14/03/2025"));
        assert_eq!(try_format_date(day, "%Q"), None);
        assert_eq!(try_format_date(day, "%H:%M"), None);
    }

    #[test]
    fn test_new_formats_date() {
        let record = sample();
        assert_eq!(record.date, "2025-01-15");
        assert_eq!(
            record.parsed_date().unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_malformed_date() {
        let mut record = sample();
        record.date = "15/01/2025".to_string();
        assert!(matches!(
            record.parsed_date(),
            Err(LedgerError::MalformedData(_))
        ));
    }

    #[test]
    fn test_validation() {
        assert!(sample().validate().is_ok());
        assert_eq!(
            validate_amount(Money::zero()),
            Err(ExpenseValidationError::NonPositiveAmount(Money::zero()))
        );
        assert_eq!(
            validate_category("   "),
            Err(ExpenseValidationError::EmptyCategory)
        );
    }

    #[test]
    fn test_validation_error_maps_to_ledger_error() {
        let err: LedgerError = ExpenseValidationError::NonPositiveAmount(Money::zero()).into();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));

        let err: LedgerError = ExpenseValidationError::EmptyCategory.into();
        assert!(matches!(err, LedgerError::InvalidCategory(_)));
    }

    #[test]
    fn test_apply_sparse_update() {
        let mut record = sample();
        let update = ExpenseUpdate::new()
            .amount(Money::from_cents(900))
            .description("dinner");

        record.apply(&update);

        assert_eq!(record.amount.cents(), 900);
        assert_eq!(record.description, "dinner");
        assert_eq!(record.category, "food");
        assert_eq!(record.date, "2025-01-15");
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut record = sample();
        let before = record.clone();
        let update = ExpenseUpdate::new();

        assert!(update.is_empty());
        record.apply(&update);
        assert_eq!(record, before);
    }

    #[test]
    fn test_update_validation_checks_supplied_fields_only() {
        assert!(ExpenseUpdate::new().validate().is_ok());
        assert!(ExpenseUpdate::new()
            .amount(Money::from_cents(-1))
            .validate()
            .is_err());
        assert!(ExpenseUpdate::new().category("").validate().is_err());
    }

    #[test]
    fn test_deserialize_without_description() {
        let json = r#"{"id": 3, "amount": 20.0, "category": "rent", "date": "2025-02-01"}"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, ExpenseId::new(3));
        assert_eq!(record.amount.cents(), 2000);
        assert!(record.description.is_empty());
    }
}
