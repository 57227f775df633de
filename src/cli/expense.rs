//! Expense CLI commands
//!
//! Implements add, edit, delete and list for individual expenses.

use clap::Args;

use super::{parse_amount, parse_date, parse_id, print_storage_warning};
use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::LedgerResult;
use crate::models::ExpenseUpdate;
use crate::services::LedgerStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g., "12", "12.50" or "$12.50")
    pub amount: String,

    /// Category label
    pub category: String,

    /// Date of the expense (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Free-text description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Arguments for `edit`
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Expense ID
    pub id: String,

    /// New amount
    #[arg(short, long)]
    pub amount: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// New description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

impl EditArgs {
    fn to_update(&self) -> LedgerResult<ExpenseUpdate> {
        let mut update = ExpenseUpdate::new();
        if let Some(amount) = &self.amount {
            update = update.amount(parse_amount(amount)?);
        }
        if let Some(category) = &self.category {
            update = update.category(category.as_str());
        }
        if let Some(date) = &self.date {
            update = update.date(parse_date(date)?);
        }
        if let Some(description) = &self.description {
            update = update.description(description.as_str());
        }
        Ok(update)
    }
}

/// Handle `add`
pub fn handle_add_command(
    store: &mut LedgerStore,
    settings: &Settings,
    args: AddArgs,
) -> LedgerResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = args.date.as_deref().map(parse_date).transpose()?;

    let record = store.add_expense(amount, &args.category, date, args.description.as_deref())?;

    println!(
        "Added expense {}: {} for {} on {}",
        record.id,
        record.amount.format_with_symbol(&settings.currency_symbol),
        record.category,
        record.date
    );
    print_storage_warning(store);
    Ok(())
}

/// Handle `edit`
pub fn handle_edit_command(
    store: &mut LedgerStore,
    settings: &Settings,
    args: EditArgs,
) -> LedgerResult<()> {
    let id = parse_id(&args.id)?;
    let update = args.to_update()?;

    let record = store.edit_expense(id, &update)?;

    if update.is_empty() {
        println!("Nothing to change for expense {}.", id);
    } else {
        println!("Updated expense {}:", id);
    }
    print!(
        "{}",
        format_expense_details(&record, &settings.currency_symbol)
    );
    print_storage_warning(store);
    Ok(())
}

/// Handle `delete`
pub fn handle_delete_command(store: &mut LedgerStore, id: &str) -> LedgerResult<()> {
    let id = parse_id(id)?;

    match store.delete_expense(id) {
        0 => println!("No expense with ID {}; nothing deleted.", id),
        _ => println!("Deleted expense {}.", id),
    }
    print_storage_warning(store);
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(store: &LedgerStore, settings: &Settings) -> LedgerResult<()> {
    print!(
        "{}",
        format_expense_table(store.expenses(), &settings.currency_symbol)
    );
    Ok(())
}
