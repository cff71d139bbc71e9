//! Monthly report CLI command

use crate::config::Settings;
use crate::display::format_monthly_report;
use crate::error::LedgerResult;
use crate::models::parse_month;
use crate::services::{budget_status, LedgerStore};

/// Handle `report <YYYY-MM>`
pub fn handle_report_command(
    store: &LedgerStore,
    settings: &Settings,
    month: &str,
) -> LedgerResult<()> {
    let (year, month) = parse_month(month)?;
    let report = store.monthly_report(year, month)?;
    let budgets = budget_status(settings, store.list_all(), year, month);

    print!(
        "{}",
        format_monthly_report(&report, &budgets, &settings.currency_symbol)
    );
    Ok(())
}
