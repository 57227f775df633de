//! Report formatting utilities for terminal output
//!
//! Renders the expense report, the limit comparison, and the category chart
//! (a horizontal bar per category plus its share of total spend).

use std::collections::BTreeMap;

use crate::models::expense::{format_date, try_format_date};
use crate::models::Money;
use crate::reports::{ExpenseReport, LimitStatus};

const REPORT_WIDTH: usize = 50;
const LABEL_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// One line comparing a period's spend with its limit
pub fn format_limit_line(status: &LimitStatus, symbol: &str) -> String {
    let label = status.period.label();
    let limit = if status.is_set() {
        status.limit.format_with_symbol(symbol)
    } else {
        "not set".to_string()
    };

    let mut line = format!(
        "  {:<8} limit: {:>12} | spent: {:>12}",
        label,
        limit,
        status.spent.format_with_symbol(symbol)
    );

    if status.exceeded {
        line.push_str(&format!(
            "  over by {}",
            status.remaining.abs().format_with_symbol(symbol)
        ));
    } else if status.is_set() {
        line.push_str(&format!(
            "  {} left",
            status.remaining.format_with_symbol(symbol)
        ));
    }

    line
}

/// Format the full report
pub fn format_report(report: &ExpenseReport, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    let generated_on = try_format_date(report.generated_on, date_format)
        .unwrap_or_else(|| format_date(report.generated_on));
    output.push_str(&format!("Expense Report ({})\n", generated_on));
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "Total Income:      {:>14}\n",
        report.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses:    {:>14}\n",
        report.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining Budget:  {:>14}\n",
        report.remaining_budget.format_with_symbol(symbol)
    ));

    output.push_str("\nExpenses by Category:\n");
    if report.category_breakdown.is_empty() {
        output.push_str("  (none)\n");
    }
    for (category, amount) in &report.category_breakdown {
        output.push_str(&format!(
            "  {:<width$} {:>14}\n",
            truncate(category, LABEL_WIDTH),
            amount.format_with_symbol(symbol),
            width = LABEL_WIDTH
        ));
    }

    output.push_str("\nSpending Limits:\n");
    for status in report.limit_statuses() {
        output.push_str(&format_limit_line(&status, symbol));
        output.push('\n');
    }

    let exceeded = report.exceeded_limits();
    if !exceeded.is_empty() {
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        for status in exceeded {
            output.push_str(&format!(
                "Warning: {} spending limit exceeded.\n",
                status.period.label()
            ));
        }
    }

    output
}

/// Format category totals as a bar chart, largest first
pub fn format_category_chart(
    totals: &BTreeMap<String, Money>,
    symbol: &str,
    width: usize,
) -> String {
    if totals.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut rows: Vec<(&String, Money)> = totals.iter().map(|(c, m)| (c, *m)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let grand_total = rows
        .iter()
        .fold(Money::zero(), |total, (_, m)| total.saturating_add(*m));
    let max_value = rows.first().map(|(_, m)| m.as_decimal()).unwrap_or(0.0);

    let mut output = String::new();
    output.push_str("Expenses by Category\n");
    output.push_str(&separator(LABEL_WIDTH + width + 24));
    output.push('\n');

    for (category, amount) in rows {
        let share = if grand_total.is_positive() {
            amount.as_decimal() / grand_total.as_decimal() * 100.0
        } else {
            0.0
        };
        output.push_str(&format!(
            "{:<label$} {} {:>12} {:>6}\n",
            truncate(category, LABEL_WIDTH),
            format_bar(amount.as_decimal(), max_value, width),
            amount.format_with_symbol(symbol),
            format_percentage(share),
            label = LABEL_WIDTH
        ));
    }

    output.push_str(&separator(LABEL_WIDTH + width + 24));
    output.push('\n');
    output.push_str(&format!(
        "{:<label$} {} {:>12}\n",
        "Total",
        " ".repeat(width),
        grand_total.format_with_symbol(symbol),
        label = LABEL_WIDTH
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, ExpenseRecord, LedgerState, PeriodKind};
    use chrono::NaiveDate;

    fn sample_report() -> ExpenseReport {
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let mut state = LedgerState {
            income: Money::from_cents(100000),
            ..Default::default()
        };
        state.expenses.push(ExpenseRecord::new(
            ExpenseId::new(1),
            Money::from_cents(6000),
            "food",
            today,
            "",
        ));
        state
            .spending_limits
            .set(PeriodKind::Daily, Money::from_cents(5000));
        ExpenseReport::generate(&state, today).unwrap()
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("café crème", 6), "caf...");
    }

    #[test]
    fn test_format_report() {
        let text = format_report(&sample_report(), "$", "%Y-%m-%d");

        assert!(text.starts_with("Expense Report (2025-03-14)"));
        assert!(text.contains("Total Income:"));
        assert!(text.contains("$1000.00"));
        assert!(text.contains("$940.00"));
        assert!(text.contains("food"));
        assert!(text.contains("over by $10.00"));
        assert!(text.contains("not set"));
        assert!(text.contains("Warning: Daily spending limit exceeded."));
    }

    #[test]
    fn test_format_report_custom_date_format() {
        let text = format_report(&sample_report(), "$", "%d/%m/%Y");
        assert!(text.starts_with("Expense Report (14/03/2025)"));
    }

    #[test]
    fn test_format_report_bad_date_format_falls_back() {
        let text = format_report(&sample_report(), "$", "%Q");
        assert!(text.starts_with("Expense Report (2025-03-14)"));
    }

    #[test]
    fn test_format_category_chart() {
        let mut totals = BTreeMap::new();
        totals.insert("food".to_string(), Money::from_cents(2500));
        totals.insert("rent".to_string(), Money::from_cents(7500));

        let chart = format_category_chart(&totals, "$", 10);
        let lines: Vec<&str> = chart.lines().collect();

        // Largest category first, bar scaled to the largest total
        assert!(lines[2].starts_with("rent"));
        assert!(lines[2].contains("██████████"));
        assert!(lines[2].contains("75%"));
        assert!(lines[3].starts_with("food"));
        assert!(lines[3].contains("25%"));
        assert!(chart.contains("$100.00"));
    }

    #[test]
    fn test_empty_chart() {
        assert_eq!(
            format_category_chart(&BTreeMap::new(), "$", 10),
            "No expenses recorded.\n"
        );
    }
}
