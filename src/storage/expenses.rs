//! Expense repository for the CSV backing file
//!
//! Loads the whole ledger on demand and rewrites the whole file on every
//! mutation. The file format is a plain CSV with a header row:
//! `id,date,category,amount,description`. Quoting is handled by the csv
//! crate, so a category or description containing a comma cannot corrupt
//! the file.

use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseRecord, Money, DATE_FORMAT};
use crate::storage::file_io::write_atomic;

/// Column order of the backing file
const HEADER: [&str; 5] = ["id", "date", "category", "amount", "description"];

/// A row the loader could not parse, kept for warning the user
#[derive(Debug, Clone)]
pub struct SkippedRow {
    /// 1-based line number in the backing file
    pub line: u64,
    /// Why the row was rejected
    pub reason: String,
}

/// Result of loading the backing file
#[derive(Debug, Default)]
pub struct LoadedLedger {
    /// Well-formed records, in file order
    pub records: Vec<ExpenseRecord>,
    /// Malformed rows that were skipped
    pub skipped: Vec<SkippedRow>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a repository backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all expenses from the backing file
    ///
    /// A missing file is an empty ledger, not an error. Malformed rows
    /// (wrong column count, bad id/date/amount) are skipped and reported
    /// in [`LoadedLedger::skipped`] so the caller can warn.
    pub fn load(&self) -> LedgerResult<LoadedLedger> {
        if !self.path.exists() {
            return Ok(LoadedLedger::default());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                LedgerError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut loaded = LoadedLedger::default();

        for result in reader.records() {
            let record = result.map_err(|e| {
                LedgerError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
            })?;

            let line = record.position().map(|p| p.line()).unwrap_or(0);
            match parse_row(&record) {
                Ok(expense) => loaded.records.push(expense),
                Err(reason) => loaded.skipped.push(SkippedRow { line, reason }),
            }
        }

        Ok(loaded)
    }

    /// Rewrite the backing file with the full ledger contents
    ///
    /// The write is atomic: a temp file is written and renamed over the
    /// target, so a failure leaves the previous file intact. An empty
    /// ledger still gets the header row.
    pub fn save(&self, records: &[ExpenseRecord]) -> LedgerResult<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(HEADER)
            .map_err(|e| LedgerError::Storage(format!("Failed to write header: {}", e)))?;

        for expense in records {
            writer
                .write_record([
                    expense.id.to_string(),
                    expense.date.format(DATE_FORMAT).to_string(),
                    expense.category.clone(),
                    expense.amount.to_string(),
                    expense.description.clone(),
                ])
                .map_err(|e| LedgerError::Storage(format!("Failed to write row: {}", e)))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| LedgerError::Storage(format!("Failed to flush rows: {}", e)))?;

        write_atomic(&self.path, &bytes)
    }
}

fn parse_row(record: &StringRecord) -> Result<ExpenseRecord, String> {
    if record.len() < 4 {
        return Err(format!("expected at least 4 columns, found {}", record.len()));
    }

    let id: u64 = record[0]
        .trim()
        .parse()
        .map_err(|_| format!("bad id '{}'", &record[0]))?;

    let date = chrono::NaiveDate::parse_from_str(record[1].trim(), DATE_FORMAT)
        .map_err(|_| format!("bad date '{}'", &record[1]))?;

    let category = record[2].trim().to_string();
    if category.is_empty() {
        return Err("empty category".to_string());
    }

    let amount = Money::parse(&record[3]).map_err(|_| format!("bad amount '{}'", &record[3]))?;

    let description = record.get(4).unwrap_or("").to_string();

    Ok(ExpenseRecord::new(id, date, category, amount, description))
}
