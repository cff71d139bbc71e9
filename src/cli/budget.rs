//! Budget CLI commands

use clap::Subcommand;

use crate::audit::Operation;
use crate::cli::record_mutation;
use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;
use crate::models::{normalize_category, parse_amount, parse_month};
use crate::services::{budget_status, LedgerStore};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a monthly spending limit for a category
    Set {
        /// Month (YYYY-MM)
        month: String,
        /// Category
        category: String,
        /// Limit amount (e.g. "300.00")
        limit: String,
    },
    /// Show budget status for a month
    Show {
        /// Month (YYYY-MM)
        month: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &LedgerStore,
    settings: &mut Settings,
    paths: &LedgerPaths,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Set {
            month,
            category,
            limit,
        } => {
            let (year, month_num) = parse_month(&month)?;
            let category = normalize_category(&category)?;
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

            record_mutation(
                paths,
                settings,
                Operation::BudgetSet,
                format!("budget {} {}: {}", month_key, category, limit),
            );
        }
        BudgetCommands::Show { month } => {
            let (year, month_num) = parse_month(&month)?;
            let statuses = budget_status(settings, store.list_all(), year, month_num);

            if statuses.is_empty() {
                println!("No budgets set for {}-{:02}.", year, month_num);
                return Ok(());
            }

            println!("Budgets for {}-{:02}:", year, month_num);
            for status in statuses {
                let marker = if status.is_exceeded() { "  OVER" } else { "" };
                println!(
                    "  {:15} {:>12} of {:>12}  (remaining {}){}",
                    status.category,
                    status.spent.format_with_symbol(&settings.currency_symbol),
                    status.limit.format_with_symbol(&settings.currency_symbol),
                    status.remaining.format_with_symbol(&settings.currency_symbol),
                    marker
                );
            }
        }
    }

    Ok(())
}
