//! Expense display formatting
//!
//! Renders the expense list as a table and single expenses as detail blocks.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::ExpenseRecord;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn from_record(record: &ExpenseRecord, symbol: &str) -> Self {
        Self {
            id: record.id.to_string(),
            amount: record.amount.format_with_symbol(symbol),
            category: record.category.clone(),
            date: record.date.clone(),
            description: record.description.clone(),
        }
    }
}

/// Format expenses as a table, in ledger order
pub fn format_expense_table(expenses: &[ExpenseRecord], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::from_record(e, symbol))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format one expense for display
pub fn format_expense_details(record: &ExpenseRecord, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", record.id));
    output.push_str(&format!("Date:        {}\n", record.date));
    output.push_str(&format!(
        "Amount:      {}\n",
        record.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", record.category));

    if !record.description.is_empty() {
        output.push_str(&format!("Description: {}\n", record.description));
    }

    output
}
