//! Monthly spending report
//!
//! Selects all records falling within one calendar month and aggregates the
//! total plus a per-category subtotal. Only categories with at least one
//! matching record appear.

use std::collections::BTreeMap;

use crate::models::{ExpenseRecord, Money};

/// Total and per-category breakdown for one calendar month
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// Report year
    pub year: i32,
    /// Report month (1-12)
    pub month: u32,
    /// Total spending across all matched records
    pub total: Money,
    /// Subtotal per category present in the month (sorted by category)
    pub by_category: BTreeMap<String, Money>,
    /// The matched records, in ledger order
    pub records: Vec<ExpenseRecord>,
}

impl MonthlyReport {
    /// Aggregate the records of one calendar month
    ///
    /// No matching records is a valid report: zero total, empty breakdown.
    pub fn generate(records: &[ExpenseRecord], year: i32, month: u32) -> Self {
        let matched: Vec<ExpenseRecord> = records
            .iter()
            .filter(|e| e.in_month(year, month))
            .cloned()
            .collect();

        let total = matched.iter().map(|e| e.amount).sum();

        let mut by_category: BTreeMap<String, Money> = BTreeMap::new();
        for expense in &matched {
            *by_category.entry(expense.category.clone()).or_default() += expense.amount;
        }

        Self {
            year,
            month,
            total,
            by_category,
            records: matched,
        }
    }

    /// The month key used for budgets, e.g. "2023-10"
    pub fn month_key(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}
