//! Expense CLI commands

use clap::Subcommand;

use crate::audit::Operation;
use crate::cli::record_mutation;
use crate::config::{LedgerPaths, Settings};
use crate::display::{format_expense_details, format_expense_table};
use crate::error::LedgerResult;
use crate::models::{parse_amount, parse_date};
use crate::services::{check_exceeded, LedgerStore, SearchFilter};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Category (e.g. "food", "travel")
        category: String,
        /// Amount (e.g. "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'D', long, default_value = "")]
        description: String,
    },
    /// List all expenses
    List,
    /// Search expenses with combinable filters
    Search {
        /// Substring match over description and category
        #[arg(short, long)]
        keyword: Option<String>,
        /// Exact category match
        #[arg(short, long)]
        category: Option<String>,
        /// Earliest date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Minimum amount, inclusive
        #[arg(long)]
        min: Option<String>,
        /// Maximum amount, inclusive
        #[arg(long)]
        max: Option<String>,
    },
    /// Delete an expense by id
    Delete {
        /// Expense id (shown by `list`)
        id: u64,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut LedgerStore,
    settings: &Settings,
    paths: &LedgerPaths,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            date,
            description,
        } => {
            let date = date.unwrap_or_else(|| {
                chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
            });

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
        }
        ExpenseCommands::List => {
            print!(
                "{}",
                format_expense_table(store.list_all(), &settings.currency_symbol)
            );
        }
        ExpenseCommands::Search {
            keyword,
            category,
            from,
            to,
            min,
            max,
        } => {
            let filter = build_search_filter(keyword, category, from, to, min, max)?;
            let results = store.search(&filter);
            print!("{}", format_expense_table(&results, &settings.currency_symbol));
        }
        ExpenseCommands::Delete { id } => {
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
        }
    }

    Ok(())
}

fn build_search_filter(
    keyword: Option<String>,
    category: Option<String>,
    from: Option<String>,
    to: Option<String>,
    min: Option<String>,
    max: Option<String>,
) -> LedgerResult<SearchFilter> {
    Ok(SearchFilter {
        keyword,
        category,
        from: from.map(|s| parse_date(&s)).transpose()?,
        to: to.map(|s| parse_date(&s)).transpose()?,
        min_amount: min.map(|s| parse_amount(&s)).transpose()?,
        max_amount: max.map(|s| parse_amount(&s)).transpose()?,
    })
}
