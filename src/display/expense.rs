//! Expense display formatting
//!
//! Plain-text tables and detail views for terminal output.

use crate::models::ExpenseRecord;
use crate::reports::MonthlyReport;
use crate::services::{BudgetStatus, CategoryFilter};

/// Format a single expense as a table row
pub fn format_expense_row(expense: &ExpenseRecord, symbol: &str) -> String {
    format!(
        "{:>4}  {}  {:15} {:>12}  {}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.category, 15),
        expense.amount.format_with_symbol(symbol),
        truncate(&expense.description, 30)
    )
}

/// Format a list of expenses as a table with a trailing total
pub fn format_expense_table(expenses: &[ExpenseRecord], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:15} {:>12}  {}\n",
        "ID", "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol));
        output.push('\n');
    }

    let total: crate::models::Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&"-".repeat(70));
    output.push('\n');
    output.push_str(&format!(
        "{:>4}  {:10}  {:15} {:>12}\n",
        "",
        "",
        format!("{} expenses", expenses.len()),
        total.format_with_symbol(symbol)
    ));

    output
}

/// Format a single expense for confirmation display
pub fn format_expense_details(expense: &ExpenseRecord, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     #{}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output
}

/// Format a category filter result: matching rows plus the category total
pub fn format_category_filter(filter: &CategoryFilter, symbol: &str) -> String {
    if filter.records.is_empty() {
        return format!("No expenses in category '{}'.\n", filter.category);
    }

    let mut output = format_expense_table(&filter.records, symbol);
    output.push_str(&format!(
        "Total for '{}': {}\n",
        filter.category,
        filter.total.format_with_symbol(symbol)
    ));
    output
}

/// Format a monthly report with optional budget status lines
pub fn format_monthly_report(
    report: &MonthlyReport,
    budgets: &[BudgetStatus],
    symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Monthly Report: {}\n", report.month_key()));
    output.push_str(&"=".repeat(40));
    output.push('\n');

    if report.records.is_empty() {
        output.push_str("No expenses recorded for this month.\n");
        return output;
    }

    output.push_str(&format!(
        "Total: {}  ({} expenses)\n\n",
        report.total.format_with_symbol(symbol),
        report.records.len()
    ));

    output.push_str("By category:\n");
    for (category, subtotal) in &report.by_category {
        output.push_str(&format!(
            "  {:15} {:>12}\n",
            category,
            subtotal.format_with_symbol(symbol)
        ));
    }

    if !budgets.is_empty() {
        output.push('\n');
        output.push_str("Budgets:\n");
        for status in budgets {
            let marker = if status.is_exceeded() { "  OVER" } else { "" };
            output.push_str(&format!(
                "  {:15} {:>12} of {:>12}{}\n",
                status.category,
                status.spent.format_with_symbol(symbol),
                status.limit.format_with_symbol(symbol),
                marker
            ));
        }
    }

    output
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense(id: u64, category: &str, cents: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            id,
            NaiveDate::from_ymd_opt(2023, 10, 5).unwrap(),
            category.to_string(),
            Money::from_cents(cents),
            "lunch".to_string(),
        )
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$"), "No expenses found.\n");
    }

    #[test]
    fn test_table_contains_rows_and_total() {
        let expenses = vec![expense(1, "food", 1000), expense(2, "travel", 2000)];
        let table = format_expense_table(&expenses, "$");

        assert!(table.contains("food"));
        assert!(table.contains("$10.00"));
        assert!(table.contains("$30.00"));
        assert!(table.contains("2 expenses"));
    }

    #[test]
    fn test_details_include_description_only_when_present() {
        let with = format_expense_details(&expense(1, "food", 1000), "$");
        assert!(with.contains("Description: lunch"));

        let mut record = expense(1, "food", 1000);
        record.description.clear();
        let without = format_expense_details(&record, "$");
        assert!(!without.contains("Description:"));
    }

    #[test]
    fn test_monthly_report_formatting() {
        let records = vec![expense(1, "food", 1000)];
        let report = MonthlyReport::generate(&records, 2023, 10);
        let text = format_monthly_report(&report, &[], "$");

        assert!(text.contains("Monthly Report: 2023-10"));
        assert!(text.contains("food"));
        assert!(text.contains("$10.00"));
    }

    #[test]
    fn test_truncate_long_values() {
        let truncated = truncate("a very long description that will not fit", 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('…'));
    }
}
