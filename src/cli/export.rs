//! Export CLI command

use std::path::PathBuf;

use chrono::Local;

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::export::export_expenses_to_file;
use crate::services::LedgerStore;

/// Handle `export`, writing the expense list as CSV
pub fn handle_export_command(
    store: &LedgerStore,
    settings: &Settings,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let path = export_expenses_to_file(
        store.expenses(),
        output.as_deref(),
        &settings.export_dir(),
        Local::now().date_naive(),
    )?;

    println!(
        "Exported {} expense(s) to {}",
        store.expenses().len(),
        path.display()
    );
    Ok(())
}
