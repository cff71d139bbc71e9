//! Expense record model
//!
//! One row of the ledger: an identifier, a calendar date, a category label,
//! a positive amount, and an optional free-text description.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::Money;

/// Strict date format used everywhere: backing file, CLI input, display
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense entry in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Stable identifier, assigned at creation and persisted
    pub id: u64,
    /// Calendar date of the expense
    pub date: NaiveDate,
    /// Category label, stored trimmed and lowercased
    pub category: String,
    /// Amount spent, strictly positive
    pub amount: Money,
    /// Optional free-text note
    #[serde(default)]
    pub description: String,
}

impl ExpenseRecord {
    /// Build a record from already-validated parts
    pub fn new(
        id: u64,
        date: NaiveDate,
        category: String,
        amount: Money,
        description: String,
    ) -> Self {
        Self {
            id,
            date,
            category,
            amount,
            description,
        }
    }

    /// True if the record's date falls in the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        use chrono::Datelike;
        self.date.year() == year && self.date.month() == month
    }
}

/// Parse and validate a date string (`YYYY-MM-DD`, real calendar date)
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::BadDate(input.trim().to_string()))
}

/// Parse and validate an amount string (positive, at most two decimals)
pub fn parse_amount(input: &str) -> Result<Money, ValidationError> {
    let amount =
        Money::parse(input).map_err(|_| ValidationError::BadAmount(input.trim().to_string()))?;
    if !amount.is_positive() {
        return Err(ValidationError::BadAmount(input.trim().to_string()));
    }
    Ok(amount)
}

/// Parse a month argument (`YYYY-MM`) into a year and month
pub fn parse_month(input: &str) -> Result<(i32, u32), ValidationError> {
    let bad = || ValidationError::BadDate(input.trim().to_string());
    let (year, month) = input.trim().split_once('-').ok_or_else(bad)?;
    let year: i32 = year.parse().map_err(|_| bad())?;
    let month: u32 = month.parse().map_err(|_| bad())?;
    if !(1..=12).contains(&month) {
        return Err(bad());
    }
    Ok((year, month))
}

/// Normalize and validate a category label
///
/// Categories are compared case-insensitively throughout, so they are
/// stored trimmed and lowercased at the point of entry.
pub fn normalize_category(input: &str) -> Result<String, ValidationError> {
    let category = input.trim().to_lowercase();
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(category)
}
