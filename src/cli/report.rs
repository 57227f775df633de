//! Report and chart CLI commands

use crate::config::settings::Settings;
use crate::display::{format_category_chart, format_report};
use crate::error::LedgerResult;
use crate::export::export_report_json;
use crate::services::LedgerStore;

/// Handle `report`, as text or as JSON
pub fn handle_report_command(
    store: &LedgerStore,
    settings: &Settings,
    json: bool,
) -> LedgerResult<()> {
    let report = store.generate_report()?;

    if json {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        export_report_json(&report, &mut handle, true)?;
    } else {
        print!(
            "{}",
            format_report(&report, &settings.currency_symbol, &settings.date_format)
        );
    }

    Ok(())
}

/// Handle `chart`
pub fn handle_chart_command(
    store: &LedgerStore,
    settings: &Settings,
    width: Option<usize>,
) -> LedgerResult<()> {
    let width = width.unwrap_or(settings.chart_width).max(1);
    let totals = store.aggregate_by_category()?;
    print!(
        "{}",
        format_category_chart(&totals, &settings.currency_symbol, width)
    );
    Ok(())
}
