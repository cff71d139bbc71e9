//! Interactive menu loop
//!
//! The default interface: a numbered menu on stdin/stdout. Every error is
//! printed and control returns to the menu; the process exits only via the
//! exit option (or end of input).

use std::io::{self, BufRead, Write};

use crate::audit::Operation;
use crate::cli::record_mutation;
use crate::config::{LedgerPaths, Settings};
use crate::display::{
    format_category_filter, format_expense_details, format_expense_table, format_monthly_report,
};
use crate::error::LedgerResult;
use crate::export::export_expenses_to_path;
use crate::models::{parse_amount, parse_date, parse_month};
use crate::services::{budget_status, check_exceeded, LedgerStore, SearchFilter};

/// Run the interactive menu until the user exits
pub fn run_menu(
    store: &mut LedgerStore,
    settings: &mut Settings,
    paths: &LedgerPaths,
) -> LedgerResult<()> {
    if !store.skipped_rows().is_empty() {
        println!(
            "Warning: skipped {} malformed row(s) in the expenses file:",
            store.skipped_rows().len()
        );
        for skipped in store.skipped_rows() {
            println!("  line {}: {}", skipped.line, skipped.reason);
        }
        println!();
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "Choose an option")? else {
            break;
        };

        let result = match choice.as_str() {
            "1" => add_expense(&mut input, store, settings, paths),
            "2" => view_all(store, settings),
            "3" => search_expenses(&mut input, store, settings),
            "4" => delete_expense(&mut input, store, settings, paths),
            "5" => monthly_report(&mut input, store, settings),
            "6" => set_budget(&mut input, store, settings, paths),
            "7" => export_data(&mut input, store),
            "0" | "q" | "exit" => break,
            "" => continue,
            other => {
                println!("Unknown option '{}'", other);
                Ok(())
            }
        };

        // Errors come back to the menu as messages, never as process exits
        if let Err(err) = result {
            println!("Error: {}", err);
        }
        println!();
    }

    println!("Goodbye!");
    Ok(())
}

fn print_menu() {
    println!("===== Expense Ledger =====");
    println!("1. Add expense");
    println!("2. View all expenses");
    println!("3. Search & filter");
    println!("4. Delete expense");
    println!("5. Monthly report");
    println!("6. Set budget");
    println!("7. Export data");
    println!("0. Exit");
}

/// Print a prompt and read one trimmed line; `None` means end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> io::Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn add_expense<R: BufRead>(
    input: &mut R,
    store: &mut LedgerStore,
    settings: &Settings,
    paths: &LedgerPaths,
) -> LedgerResult<()> {
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let Some(date) = prompt(input, &format!("Date (YYYY-MM-DD, empty for {})", today))? else {
        return Ok(());
    };
    let date = if date.is_empty() { today } else { date };

    let mut suggestions = settings.categories.clone();
    for used in store.used_categories() {
        if !suggestions.contains(&used) {
            suggestions.push(used);
        }
    }
    suggestions.sort();
    println!("Known categories: {}", suggestions.join(", "));

    let Some(category) = prompt(input, "Category")? else {
        return Ok(());
    };
    let Some(amount) = prompt(input, "Amount")? else {
        return Ok(());
    };
    let Some(description) = prompt(input, "Description (optional)")? else {
        return Ok(());
    };

    let record = store.add(&date, &category, &amount, &description)?;
    println!("Added expense:");
    print!("{}", format_expense_details(&record, &settings.currency_symbol));

    if let Some(status) = check_exceeded(settings, store.list_all(), &record) {
        println!(
            "Warning: budget exceeded for '{}'! Spent: {}, Budget: {}",
            status.category,
            status.spent.format_with_symbol(&settings.currency_symbol),
            status.limit.format_with_symbol(&settings.currency_symbol)
        );
    }

    record_mutation(
        paths,
        settings,
        Operation::Create,
        format!(
            "expense #{}: {} {} on {}",
            record.id, record.category, record.amount, record.date
        ),
    );
    Ok(())
}

fn view_all(store: &LedgerStore, settings: &Settings) -> LedgerResult<()> {
    print!(
        "{}",
        format_expense_table(store.list_all(), &settings.currency_symbol)
    );
    Ok(())
}

fn search_expenses<R: BufRead>(
    input: &mut R,
    store: &LedgerStore,
    settings: &Settings,
) -> LedgerResult<()> {
    println!("Leave any filter empty to skip it.");

    let Some(category) = prompt(input, "Category")? else {
        return Ok(());
    };

    // Category-only search doubles as the classic "filter by category"
    // view with its subtotal line.
    let Some(keyword) = prompt(input, "Keyword")? else {
        return Ok(());
    };
    let Some(from) = prompt(input, "From date (YYYY-MM-DD)")? else {
        return Ok(());
    };
    let Some(to) = prompt(input, "To date (YYYY-MM-DD)")? else {
        return Ok(());
    };
    let Some(min) = prompt(input, "Minimum amount")? else {
        return Ok(());
    };
    let Some(max) = prompt(input, "Maximum amount")? else {
        return Ok(());
    };

    let only_category = !category.is_empty()
        && keyword.is_empty()
        && from.is_empty()
        && to.is_empty()
        && min.is_empty()
        && max.is_empty();

    if only_category {
        let filtered = store.filter_by_category(&category);
        print!(
            "{}",
            format_category_filter(&filtered, &settings.currency_symbol)
        );
        return Ok(());
    }

    let filter = SearchFilter {
        keyword: non_empty(keyword),
        category: non_empty(category),
        from: non_empty(from).map(|s| parse_date(&s)).transpose()?,
        to: non_empty(to).map(|s| parse_date(&s)).transpose()?,
        min_amount: non_empty(min).map(|s| parse_amount(&s)).transpose()?,
        max_amount: non_empty(max).map(|s| parse_amount(&s)).transpose()?,
    };

    let results = store.search(&filter);
    print!(
        "{}",
        format_expense_table(&results, &settings.currency_symbol)
    );
    Ok(())
}

fn delete_expense<R: BufRead>(
    input: &mut R,
    store: &mut LedgerStore,
    settings: &Settings,
    paths: &LedgerPaths,
) -> LedgerResult<()> {
    if store.is_empty() {
        println!("No expenses to delete.");
        return Ok(());
    }

    print!(
        "{}",
        format_expense_table(store.list_all(), &settings.currency_symbol)
    );

    let Some(id) = prompt(input, "Expense id to delete")? else {
        return Ok(());
    };
    let Ok(id) = id.parse::<u64>() else {
        println!("Not a valid id: '{}'", id);
        return Ok(());
    };

    let removed = store.delete(id)?;
    println!("Deleted expense:");
    print!("{}", format_expense_details(&removed, &settings.currency_symbol));

    record_mutation(
        paths,
        settings,
        Operation::Delete,
        format!(
            "expense #{}: {} {} on {}",
            removed.id, removed.category, removed.amount, removed.date
        ),
    );
    Ok(())
}

fn monthly_report<R: BufRead>(
    input: &mut R,
    store: &LedgerStore,
    settings: &Settings,
) -> LedgerResult<()> {
    let Some(month) = prompt(input, "Month (YYYY-MM)")? else {
        return Ok(());
    };
    let (year, month) = parse_month(&month)?;

    let report = store.monthly_report(year, month)?;
    let budgets = budget_status(settings, store.list_all(), year, month);
    print!(
        "{}",
        format_monthly_report(&report, &budgets, &settings.currency_symbol)
    );
    Ok(())
}

fn set_budget<R: BufRead>(
    input: &mut R,
    store: &LedgerStore,
    settings: &mut Settings,
    paths: &LedgerPaths,
) -> LedgerResult<()> {
    let Some(month) = prompt(input, "Month (YYYY-MM)")? else {
        return Ok(());
    };
    let Some(category) = prompt(input, "Category")? else {
        return Ok(());
    };
    let Some(limit) = prompt(input, "Limit amount")? else {
        return Ok(());
    };

    let (year, month_num) = parse_month(&month)?;
    let category = crate::models::normalize_category(&category)?;
    let limit = parse_amount(&limit)?;

    let month_key = format!("{}-{:02}", year, month_num);
    settings.set_budget(month_key.clone(), category.clone(), limit);
    settings.save(paths)?;

    println!(
        "Budget set: {} for '{}' in {}",
        limit.format_with_symbol(&settings.currency_symbol),
        category,
        month_key
    );

    let statuses = budget_status(settings, store.list_all(), year, month_num);
    for status in statuses.iter().filter(|s| s.is_exceeded()) {
        println!(
            "Note: '{}' is already over this budget ({} spent).",
            status.category,
            status.spent.format_with_symbol(&settings.currency_symbol)
        );
    }

    record_mutation(
        paths,
        settings,
        Operation::BudgetSet,
        format!("budget {} {}: {}", month_key, category, limit),
    );
    Ok(())
}

fn export_data<R: BufRead>(input: &mut R, store: &LedgerStore) -> LedgerResult<()> {
    let Some(path) = prompt(input, "Export to file")? else {
        return Ok(());
    };
    if path.is_empty() {
        println!("No path given.");
        return Ok(());
    }

    export_expenses_to_path(store.list_all(), &path)?;
    println!("Exported {} expenses to {}", store.len(), path);
    Ok(())
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
