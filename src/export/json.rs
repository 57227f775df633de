//! JSON Export functionality
//!
//! Exports the expense report, with limit evaluation, as a versioned JSON
//! document.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::reports::{ExpenseReport, LimitStatus};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Report export structure
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// The report itself
    pub report: &'a ExpenseReport,

    /// Per-period limit evaluation
    pub limits: Vec<LimitStatus>,
}

impl<'a> ReportExport<'a> {
    pub fn new(report: &'a ExpenseReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            report,
            limits: report.limit_statuses(),
        }
    }
}

/// Write the report as JSON
pub fn export_report_json<W: Write>(
    report: &ExpenseReport,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = ReportExport::new(report);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, ExpenseRecord, LedgerState, Money, PeriodKind};
    use chrono::NaiveDate;

    fn sample_report() -> ExpenseReport {
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let mut state = LedgerState {
            income: Money::from_cents(300000),
            ..Default::default()
        };
        state.expenses.push(ExpenseRecord::new(
            ExpenseId::new(1),
            Money::from_cents(4500),
            "food",
            today,
            "",
        ));
        state
            .spending_limits
            .set(PeriodKind::Daily, Money::from_cents(4000));
        ExpenseReport::generate(&state, today).unwrap()
    }

    #[test]
    fn test_export_report_json() {
        let report = sample_report();
        let mut output = Vec::new();
        export_report_json(&report, &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["report"]["total_expenses"], 45.0);
        assert_eq!(value["report"]["remaining_budget"], 2955.0);
        assert_eq!(value["limits"][0]["period"], "daily");
        assert_eq!(value["limits"][0]["exceeded"], true);
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let report = sample_report();
        let mut output = Vec::new();
        export_report_json(&report, &mut output, false).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
