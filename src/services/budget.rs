//! Monthly category budgets
//!
//! Budgets live in the settings file as a month -> category -> limit table.
//! Spending against a budget is computed from the ledger on demand; nothing
//! about budgets is stored in the backing expenses file.

use chrono::Datelike;

use crate::config::Settings;
use crate::models::{ExpenseRecord, Money};
use crate::reports::MonthlyReport;

/// Spending position of one budgeted category in one month
#[derive(Debug, Clone)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// Negative when the budget is exceeded
    pub remaining: Money,
}

impl BudgetStatus {
    /// True when spending has gone over the limit
    pub fn is_exceeded(&self) -> bool {
        self.spent > self.limit
    }
}

/// Status of every budgeted category for a month, in category order
///
/// Categories with a budget but no spending still appear, with zero spent.
pub fn budget_status(
    settings: &Settings,
    records: &[ExpenseRecord],
    year: i32,
    month: u32,
) -> Vec<BudgetStatus> {
    let month_key = format!("{}-{:02}", year, month);
    let Some(limits) = settings.budgets.get(&month_key) else {
        return Vec::new();
    };

    let report = MonthlyReport::generate(records, year, month);

    limits
        .iter()
        .map(|(category, &limit)| {
            let spent = report
                .by_category
                .get(category)
                .copied()
                .unwrap_or_default();
            BudgetStatus {
                category: category.clone(),
                limit,
                spent,
                remaining: limit - spent,
            }
        })
        .collect()
}

/// Check whether a newly added expense pushed its category over budget
///
/// Returns the exceeded status so the shell can warn; `None` when no budget
/// is set for that month and category, or the budget still holds.
pub fn check_exceeded(
    settings: &Settings,
    records: &[ExpenseRecord],
    added: &ExpenseRecord,
) -> Option<BudgetStatus> {
    let month_key = format!("{}-{:02}", added.date.year(), added.date.month());
    let limit = settings.budget_limit(&month_key, &added.category)?;

    let spent: Money = records
        .iter()
        .filter(|e| {
            e.category == added.category
                && e.in_month(added.date.year(), added.date.month())
        })
        .map(|e| e.amount)
        .sum();

    if spent > limit {
        Some(BudgetStatus {
            category: added.category.clone(),
            limit,
            spent,
            remaining: limit - spent,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(id: u64, date: (i32, u32, u32), category: &str, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            id,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category.to_string(),
            Money::from_cents(cents),
            String::new(),
        )
    }

    fn settings_with_budget(month: &str, category: &str, cents: i64) -> Settings {
        let mut settings = Settings::default();
        settings.set_budget(month.into(), category.into(), Money::from_cents(cents));
        settings
    }

    #[test]
    fn test_status_includes_unspent_budget() {
        let settings = settings_with_budget("2023-10", "food", 5000);
        let statuses = budget_status(&settings, &[], 2023, 10);

        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].spent, Money::zero());
        assert_eq!(statuses[0].remaining, Money::from_cents(5000));
        assert!(!statuses[0].is_exceeded());
    }

    #[test]
    fn test_status_arithmetic() {
        let settings = settings_with_budget("2023-10", "food", 5000);
        let records = vec![
            expense(1, (2023, 10, 5), "food", 3000),
            expense(2, (2023, 10, 9), "food", 1000),
            expense(3, (2023, 11, 1), "food", 9000),
        ];

        let statuses = budget_status(&settings, &records, 2023, 10);
        assert_eq!(statuses[0].spent, Money::from_cents(4000));
        assert_eq!(statuses[0].remaining, Money::from_cents(1000));
        assert!(!statuses[0].is_exceeded());
    }

    #[test]
    fn test_no_budgets_for_month() {
        let settings = settings_with_budget("2023-10", "food", 5000);
        assert!(budget_status(&settings, &[], 2023, 11).is_empty());
    }

    #[test]
    fn test_check_exceeded_fires_only_over_limit() {
        let settings = settings_with_budget("2023-10", "food", 2500);
        let within = vec![expense(1, (2023, 10, 5), "food", 2000)];
        assert!(check_exceeded(&settings, &within, &within[0]).is_none());

        let over = vec![
            expense(1, (2023, 10, 5), "food", 2000),
            expense(2, (2023, 10, 6), "food", 1000),
        ];
        let status = check_exceeded(&settings, &over, &over[1]).unwrap();
        assert!(status.is_exceeded());
        assert_eq!(status.spent, Money::from_cents(3000));
        assert_eq!(status.remaining, Money::from_cents(-500));
    }

    #[test]
    fn test_check_exceeded_ignores_unbudgeted_category() {
        let settings = settings_with_budget("2023-10", "food", 2500);
        let records = vec![expense(1, (2023, 10, 5), "travel", 9000)];
        assert!(check_exceeded(&settings, &records, &records[0]).is_none());
    }
}
