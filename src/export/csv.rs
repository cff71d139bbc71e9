//! CSV export
//!
//! Writes expenses to any `Write` target in the same column layout as the
//! backing file. Used for exporting the whole ledger, a filtered subset, or
//! one month's records to a user-chosen path.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseRecord, DATE_FORMAT};

/// Export expenses as CSV with a header row
pub fn export_expenses_csv<W: Write>(expenses: &[ExpenseRecord], writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "date", "category", "amount", "description"])
        .map_err(|e| LedgerError::Export(format!("Failed to write header: {}", e)))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.format(DATE_FORMAT).to_string(),
                expense.category.clone(),
                expense.amount.to_string(),
                expense.description.clone(),
            ])
            .map_err(|e| LedgerError::Export(format!("Failed to write row: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(format!("Failed to flush export: {}", e)))?;

    Ok(())
}

/// Export expenses to a file path
pub fn export_expenses_to_path(expenses: &[ExpenseRecord], path: &str) -> LedgerResult<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| LedgerError::Export(format!("Failed to create {}: {}", path, e)))?;
    export_expenses_csv(expenses, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_export_shape() {
        let expenses = vec![ExpenseRecord::new(
            1,
            NaiveDate::from_ymd_opt(2023, 10, 5).unwrap(),
            "food".into(),
            Money::from_cents(1050),
            "lunch, out".into(),
        )];

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,date,category,amount,description"));
        // Comma in the description forces quoting
        assert_eq!(lines.next(), Some("1,2023-10-05,food,10.50,\"lunch, out\""));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_empty_ledger_is_header_only() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.trim(), "id,date,category,amount,description");
    }
}
