//! Interactive numbered menu
//!
//! Reads choices and field values line by line. A failed action prints
//! `Error: ...` and returns to the menu; end of input exits the loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::Local;

use super::{parse_amount, parse_date, parse_id};
use crate::config::settings::Settings;
use crate::display::{format_category_chart, format_expense_table, format_report};
use crate::error::LedgerResult;
use crate::export::export_expenses_to_file;
use crate::models::ExpenseUpdate;
use crate::services::LedgerStore;

const MENU: &str = "
--- Expense Ledger ---
1. Add expense
2. Edit expense
3. Delete expense
4. Set income
5. Set spending limit
6. View report
7. View chart
8. Export to CSV
9. List expenses
0. Exit
";

/// Answer that clears an optional field on edit
const CLEAR_MARKER: &str = "-";

enum Flow {
    Continue,
    Quit,
}

struct Menu<'a, R, W> {
    store: &'a mut LedgerStore,
    settings: &'a Settings,
    input: R,
    output: W,
}

/// Run the menu until the user exits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    store: &mut LedgerStore,
    settings: &Settings,
    input: R,
    output: W,
) -> LedgerResult<()> {
    let mut menu = Menu {
        store,
        settings,
        input,
        output,
    };
    menu.run()
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn run(&mut self) -> LedgerResult<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.ask("Enter your choice (0-9): ")? else {
                return Ok(());
            };

            let result = match choice.as_str() {
                "1" => self.add(),
                "2" => self.edit(),
                "3" => self.delete(),
                "4" => self.set_income(),
                "5" => self.set_limit(),
                "6" => self.report(),
                "7" => self.chart(),
                "8" => self.export(),
                "9" => self.list(),
                "0" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Ok(Flow::Continue)
                }
            };

            match result {
                Ok(Flow::Continue) => self.report_storage_warning()?,
                Ok(Flow::Quit) => return Ok(()),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report_storage_warning(&mut self) -> LedgerResult<()> {
        if let Some(warning) = self.store.take_storage_warning() {
            writeln!(
                self.output,
                "Warning: {}. The change was not saved.",
                warning
            )?;
        }
        Ok(())
    }

    fn add(&mut self) -> LedgerResult<Flow> {
        let Some(amount) = self.ask("Amount: ")? else {
            return Ok(Flow::Quit);
        };
        let amount = parse_amount(&amount)?;
        let Some(category) = self.ask("Category: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(date) = self.ask("Date (YYYY-MM-DD, blank for today): ")? else {
            return Ok(Flow::Quit);
        };
        let date = Some(date.as_str())
            .filter(|d| !d.is_empty())
            .map(parse_date)
            .transpose()?;
        let Some(description) = self.ask("Description (optional): ")? else {
            return Ok(Flow::Quit);
        };

        let record = self
            .store
            .add_expense(amount, &category, date, Some(description.as_str()))?;
        writeln!(self.output, "Added expense {}.", record.id)?;
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> LedgerResult<Flow> {
        let Some(id) = self.ask("Expense ID to edit: ")? else {
            return Ok(Flow::Quit);
        };
        let id = parse_id(&id)?;
        writeln!(self.output, "Leave blank for no change")?;

        let mut update = ExpenseUpdate::new();
        let Some(amount) = self.ask("New amount: ")? else {
            return Ok(Flow::Quit);
        };
        if !amount.is_empty() {
            update = update.amount(parse_amount(&amount)?);
        }
        let Some(category) = self.ask("New category: ")? else {
            return Ok(Flow::Quit);
        };
        if !category.is_empty() {
            update = update.category(category);
        }
        let Some(date) = self.ask("New date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Quit);
        };
        if !date.is_empty() {
            update = update.date(parse_date(&date)?);
        }
        let Some(description) = self.ask("New description (- to clear): ")? else {
            return Ok(Flow::Quit);
        };
        match description.as_str() {
            "" => {}
            CLEAR_MARKER => update = update.description(""),
            _ => update = update.description(description.as_str()),
        }

        self.store.edit_expense(id, &update)?;
        writeln!(self.output, "Expense {} updated.", id)?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> LedgerResult<Flow> {
        let Some(id) = self.ask("Expense ID to delete: ")? else {
            return Ok(Flow::Quit);
        };
        let id = parse_id(&id)?;

        match self.store.delete_expense(id) {
            0 => writeln!(self.output, "No expense with ID {}.", id)?,
            _ => writeln!(self.output, "Expense {} deleted.", id)?,
        }
        Ok(Flow::Continue)
    }

    fn set_income(&mut self) -> LedgerResult<Flow> {
        let Some(amount) = self.ask("Income: ")? else {
            return Ok(Flow::Quit);
        };
        self.store.set_income(parse_amount(&amount)?)?;
        writeln!(self.output, "Income set.")?;
        Ok(Flow::Continue)
    }

    fn set_limit(&mut self) -> LedgerResult<Flow> {
        writeln!(self.output, "Limit periods: daily, monthly, yearly")?;
        let Some(period) = self.ask("Period: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.ask("Limit amount: ")? else {
            return Ok(Flow::Quit);
        };
        self.store
            .set_spending_limit(&period, parse_amount(&amount)?)?;
        writeln!(self.output, "Spending limit set.")?;
        Ok(Flow::Continue)
    }

    fn report(&mut self) -> LedgerResult<Flow> {
        let report = self.store.generate_report()?;
        write!(
            self.output,
            "{}",
            format_report(
                &report,
                &self.settings.currency_symbol,
                &self.settings.date_format
            )
        )?;
        Ok(Flow::Continue)
    }

    fn chart(&mut self) -> LedgerResult<Flow> {
        let totals = self.store.aggregate_by_category()?;
        write!(
            self.output,
            "{}",
            format_category_chart(
                &totals,
                &self.settings.currency_symbol,
                self.settings.chart_width.max(1)
            )
        )?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> LedgerResult<Flow> {
        let Some(target) = self.ask("File name (blank for default): ")? else {
            return Ok(Flow::Quit);
        };
        let target = Some(target).filter(|t| !t.is_empty()).map(PathBuf::from);

        let path = export_expenses_to_file(
            self.store.expenses(),
            target.as_deref(),
            &self.settings.export_dir(),
            Local::now().date_naive(),
        )?;
        writeln!(self.output, "Expenses exported to {}", path.display())?;
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> LedgerResult<Flow> {
        write!(
            self.output,
            "{}",
            format_expense_table(self.store.expenses(), &self.settings.currency_symbol)
        )?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money, PeriodKind};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::open(temp_dir.path().join("expenses.json"));
        (temp_dir, store)
    }

    fn run_script(store: &mut LedgerStore, script: &str) -> String {
        let mut output = Vec::new();
        run_menu(
            store,
            &Settings::default(),
            Cursor::new(script.as_bytes()),
            &mut output,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_and_exit() {
        let (_temp_dir, mut store) = create_test_store();

        let output = run_script(&mut store, "1\n12.50\nfood\n2025-01-15\nlunch\n0\n");

        assert!(output.contains("Added expense 1."));
        assert!(output.contains("Goodbye!"));
        let record = &store.expenses()[0];
        assert_eq!(record.amount, Money::from_cents(1250));
        assert_eq!(record.description, "lunch");
    }

    #[test]
    fn test_invalid_amount_returns_to_menu() {
        let (_temp_dir, mut store) = create_test_store();

        let output = run_script(&mut store, "1\n-5\nfood\n\n\n0\n");

        assert!(output.contains("Error: Invalid amount"));
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn test_invalid_choice() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "42\n0\n");
        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_blank_edit_fields_leave_values() {
        let (_temp_dir, mut store) = create_test_store();
        store
            .add_expense(Money::from_cents(500), "food", None, Some("snack"))
            .unwrap();

        run_script(&mut store, "2\n1\n\ngroceries\n\n\n0\n");

        let record = store.get_expense(ExpenseId::new(1)).unwrap();
        assert_eq!(record.category, "groceries");
        assert_eq!(record.amount, Money::from_cents(500));
        assert_eq!(record.description, "snack");
    }

    #[test]
    fn test_dash_clears_description() {
        let (_temp_dir, mut store) = create_test_store();
        store
            .add_expense(Money::from_cents(500), "food", None, Some("snack"))
            .unwrap();

        run_script(&mut store, "2\n1\n\n\n\n-\n0\n");

        let record = store.get_expense(ExpenseId::new(1)).unwrap();
        assert!(record.description.is_empty());
        assert_eq!(record.category, "food");
    }

    #[test]
    fn test_set_limit_and_income() {
        let (_temp_dir, mut store) = create_test_store();

        run_script(&mut store, "4\n1000\n5\nyearly\n5000\n0\n");

        assert_eq!(store.income(), Money::from_cents(100000));
        assert_eq!(
            store.spending_limits().get(PeriodKind::Yearly),
            Money::from_cents(500000)
        );
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "1\n12\n");
        assert!(output.contains("Category: "));
        assert!(store.expenses().is_empty());
    }
}
