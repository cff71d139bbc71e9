//! Export CLI command

use clap::Args;

use crate::error::LedgerResult;
use crate::export::export_expenses_to_path;
use crate::models::parse_month;
use crate::services::LedgerStore;

/// Arguments for `export`
#[derive(Args)]
pub struct ExportArgs {
    /// Destination CSV file path
    pub path: String,

    /// Only export one category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only export one month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,
}

/// Handle the export command
pub fn handle_export_command(store: &LedgerStore, args: ExportArgs) -> LedgerResult<()> {
    let records = match (&args.category, &args.month) {
        (Some(category), None) => store.filter_by_category(category).records,
        (None, Some(month)) => {
            let (year, month) = parse_month(month)?;
            store.monthly_report(year, month)?.records
        }
        (Some(category), Some(month)) => {
            let (year, month) = parse_month(month)?;
            store
                .filter_by_category(category)
                .records
                .into_iter()
                .filter(|e| e.in_month(year, month))
                .collect()
        }
        (None, None) => store.list_all().to_vec(),
    };

    export_expenses_to_path(&records, &args.path)?;
    println!("Exported {} expenses to {}", records.len(), args.path);
    Ok(())
}
