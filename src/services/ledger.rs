//! Ledger store: the business logic over the backing file
//!
//! Owns the in-memory ledger, validates new entries, and keeps the backing
//! file in sync with a full rewrite after every mutation. A failed rewrite
//! rolls the in-memory ledger back, so the two can never drift apart.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{normalize_category, parse_amount, parse_date, ExpenseRecord, Money};
use crate::reports::MonthlyReport;
use crate::storage::{ExpenseRepository, SkippedRow};

/// Result of filtering by category: the matching subsequence and its total
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    pub category: String,
    pub records: Vec<ExpenseRecord>,
    pub total: Money,
}

/// Combinable search filters; `None` fields match everything
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Substring match over description and category (case-insensitive)
    pub keyword: Option<String>,
    /// Exact category match (case-insensitive)
    pub category: Option<String>,
    /// Earliest date, inclusive
    pub from: Option<NaiveDate>,
    /// Latest date, inclusive
    pub to: Option<NaiveDate>,
    /// Minimum amount, inclusive
    pub min_amount: Option<Money>,
    /// Maximum amount, inclusive
    pub max_amount: Option<Money>,
}

impl SearchFilter {
    fn matches(&self, expense: &ExpenseRecord) -> bool {
        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            if !expense.description.to_lowercase().contains(&keyword)
                && !expense.category.contains(&keyword)
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if expense.category != category.trim().to_lowercase() {
                return false;
            }
        }
        if let Some(from) = self.from {
            if expense.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if expense.date > to {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if expense.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if expense.amount > max {
                return false;
            }
        }
        true
    }
}

/// The ledger store
///
/// Reconstructs the ledger from the backing file at construction and
/// rewrites the file on every mutation.
pub struct LedgerStore {
    repository: ExpenseRepository,
    records: Vec<ExpenseRecord>,
    skipped: Vec<SkippedRow>,
}

impl LedgerStore {
    /// Open the store, loading the current ledger from disk
    pub fn open(repository: ExpenseRepository) -> LedgerResult<Self> {
        let loaded = repository.load()?;
        Ok(Self {
            repository,
            records: loaded.records,
            skipped: loaded.skipped,
        })
    }

    /// Malformed rows skipped during the load, for the shell to warn about
    pub fn skipped_rows(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// Number of records in the ledger
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the ledger has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate and append a new expense, rewriting the backing file
    ///
    /// Returns the created record. The in-memory ledger is rolled back if
    /// the rewrite fails.
    pub fn add(
        &mut self,
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> LedgerResult<ExpenseRecord> {
        let date = parse_date(date)?;
        let category = normalize_category(category)?;
        let amount = parse_amount(amount)?;

        let expense = ExpenseRecord::new(
            self.next_id(),
            date,
            category,
            amount,
            description.trim().to_string(),
        );

        self.records.push(expense.clone());
        if let Err(err) = self.repository.save(&self.records) {
            self.records.pop();
            return Err(err);
        }

        Ok(expense)
    }

    /// The full ordered ledger, oldest first
    pub fn list_all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Records matching a category (case-insensitive), plus their total
    ///
    /// No match is an empty result with a zero total, not an error.
    pub fn filter_by_category(&self, category: &str) -> CategoryFilter {
        let category = category.trim().to_lowercase();
        let records: Vec<ExpenseRecord> = self
            .records
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect();
        let total = records.iter().map(|e| e.amount).sum();

        CategoryFilter {
            category,
            records,
            total,
        }
    }

    /// Records matching every populated field of the filter
    pub fn search(&self, filter: &SearchFilter) -> Vec<ExpenseRecord> {
        self.records
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    /// Delete the expense with the given id, rewriting the backing file
    ///
    /// Returns the removed record for confirmation display. The in-memory
    /// ledger is rolled back if the rewrite fails.
    pub fn delete(&mut self, id: u64) -> LedgerResult<ExpenseRecord> {
        let index = self
            .records
            .iter()
            .position(|e| e.id == id)
            .ok_or(LedgerError::NotFound { id })?;

        let removed = self.records.remove(index);
        if let Err(err) = self.repository.save(&self.records) {
            self.records.insert(index, removed);
            return Err(err);
        }

        Ok(removed)
    }

    /// Total and per-category subtotals for a calendar month
    pub fn monthly_report(&self, year: i32, month: u32) -> LedgerResult<MonthlyReport> {
        if !(1..=12).contains(&month) {
            return Err(crate::error::ValidationError::BadDate(format!(
                "{}-{:02}",
                year, month
            ))
            .into());
        }
        Ok(MonthlyReport::generate(&self.records, year, month))
    }

    /// Distinct categories already used in the ledger, sorted
    pub fn used_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.records.iter().map(|e| e.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    fn next_id(&self) -> u64 {
        self.records.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.csv"));
        let store = LedgerStore::open(repo).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_empty_ledger() {
        let (_temp_dir, store) = open_store();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());

        let report = store.monthly_report(2023, 10).unwrap();
        assert_eq!(report.total, Money::zero());
        assert!(report.by_category.is_empty());
    }

    #[test]
    fn test_add_appends_exactly_one() {
        let (_temp_dir, mut store) = open_store();

        let record = store.add("2023-10-05", "Food", "10.00", "lunch").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(record.id, 1);
        assert_eq!(record.category, "food");
        assert_eq!(record.amount, Money::from_cents(1000));
        assert_eq!(record.description, "lunch");
        assert_eq!(store.list_all().last(), Some(&record));
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (_temp_dir, mut store) = open_store();

        let err = store.add("2023-13-01", "food", "10", "").unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::BadDate(_))
        ));

        let err = store.add("2023-10-01", "food", "-5", "").unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::BadAmount(_))
        ));

        let err = store.add("2023-10-01", "", "10", "").unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::EmptyCategory)
        ));

        // Nothing was persisted
        assert!(store.is_empty());
    }

    #[test]
    fn test_mutations_persist_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        let mut store = LedgerStore::open(ExpenseRepository::new(path.clone())).unwrap();
        store.add("2023-10-05", "food", "10.00", "").unwrap();
        store.add("2023-10-20", "travel", "20.00", "").unwrap();

        let store = LedgerStore::open(ExpenseRepository::new(path)).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.list_all()[0].category, "food");
        assert_eq!(store.list_all()[1].category, "travel");
    }

    #[test]
    fn test_filter_by_category_is_case_insensitive() {
        let (_temp_dir, mut store) = open_store();
        store.add("2023-10-05", "Food", "10.00", "").unwrap();
        store.add("2023-10-06", "travel", "20.00", "").unwrap();
        store.add("2023-10-07", "FOOD", "5.50", "").unwrap();

        let filtered = store.filter_by_category("fOOd");
        assert_eq!(filtered.records.len(), 2);
        assert_eq!(filtered.total, Money::from_cents(1550));

        let expected: Vec<&ExpenseRecord> = store
            .list_all()
            .iter()
            .filter(|e| e.category == "food")
            .collect();
        assert_eq!(filtered.records.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_filter_no_match_is_empty_with_zero_total() {
        let (_temp_dir, mut store) = open_store();
        store.add("2023-10-05", "food", "10.00", "").unwrap();

        let filtered = store.filter_by_category("bills");
        assert!(filtered.records.is_empty());
        assert_eq!(filtered.total, Money::zero());
    }

    #[test]
    fn test_delete_removes_exactly_one_preserving_order() {
        let (_temp_dir, mut store) = open_store();
        store.add("2023-10-05", "food", "10.00", "").unwrap();
        store.add("2023-10-06", "travel", "20.00", "").unwrap();
        store.add("2023-10-07", "bills", "30.00", "").unwrap();

        let removed = store.delete(2).unwrap();
        assert_eq!(removed.category, "travel");

        let ids: Vec<u64> = store.list_all().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_out_of_range_is_not_found_and_leaves_ledger_unchanged() {
        let (_temp_dir, mut store) = open_store();
        store.add("2023-10-05", "food", "10.00", "").unwrap();

        assert!(store.delete(0).unwrap_err().is_not_found());
        assert!(store.delete(2).unwrap_err().is_not_found());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_stay_stable_after_delete() {
        let (_temp_dir, mut store) = open_store();
        store.add("2023-10-05", "food", "10.00", "").unwrap();
        store.add("2023-10-06", "travel", "20.00", "").unwrap();
        store.delete(1).unwrap();

        // The remaining record keeps its id; the next id does not collide
        let record = store.add("2023-10-07", "bills", "30.00", "").unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(store.list_all()[0].id, 2);
    }

    #[test]
    fn test_monthly_report_example() {
        let (_temp_dir, mut store) = open_store();
        store.add("2023-10-05", "food", "10.00", "").unwrap();
        store.add("2023-10-20", "travel", "20.00", "").unwrap();
        store.add("2023-11-01", "food", "5.00", "").unwrap();

        let report = store.monthly_report(2023, 10).unwrap();
        assert_eq!(report.total, Money::from_cents(3000));
        assert_eq!(report.by_category.len(), 2);
        assert_eq!(report.by_category["food"], Money::from_cents(1000));
        assert_eq!(report.by_category["travel"], Money::from_cents(2000));
    }

    #[test]
    fn test_monthly_report_rejects_bad_month() {
        let (_temp_dir, store) = open_store();
        let err = store.monthly_report(2023, 13).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_search_filters_combine() {
        let (_temp_dir, mut store) = open_store();
        store.add("2023-10-05", "food", "10.00", "lunch at cafe").unwrap();
        store.add("2023-10-20", "food", "42.00", "groceries").unwrap();
        store.add("2023-11-01", "travel", "99.00", "train ticket").unwrap();

        let filter = SearchFilter {
            keyword: Some("Lunch".into()),
            ..Default::default()
        };
        assert_eq!(store.search(&filter).len(), 1);

        let filter = SearchFilter {
            category: Some("food".into()),
            max_amount: Some(Money::from_cents(2000)),
            ..Default::default()
        };
        let results = store.search(&filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].description, "lunch at cafe");

        let filter = SearchFilter {
            from: chrono::NaiveDate::from_ymd_opt(2023, 10, 10),
            to: chrono::NaiveDate::from_ymd_opt(2023, 11, 30),
            ..Default::default()
        };
        assert_eq!(store.search(&filter).len(), 2);
    }

    #[test]
    fn test_used_categories_sorted_and_distinct() {
        let (_temp_dir, mut store) = open_store();
        store.add("2023-10-05", "travel", "10.00", "").unwrap();
        store.add("2023-10-06", "food", "10.00", "").unwrap();
        store.add("2023-10-07", "Food", "10.00", "").unwrap();

        assert_eq!(store.used_categories(), vec!["food", "travel"]);
    }
}
