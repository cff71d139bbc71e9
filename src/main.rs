use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_audit_command, handle_backup_command, handle_budget_command, handle_expense_command,
    handle_export_command, handle_report_command, run_menu, AuditCommands, BackupCommands,
    BudgetCommands, ExpenseCommands, ExportArgs,
};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::services::LedgerStore;
use expense_ledger::storage::ExpenseRepository;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense ledger",
    long_about = "A single-user expense ledger kept in one CSV file. Run without \
                  a subcommand for the interactive menu, or use the subcommands \
                  for scripting."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Monthly report (total + per-category breakdown)
    Report {
        /// Month to report on (YYYY-MM)
        month: String,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Audit log commands
    #[command(subcommand)]
    Audit(AuditCommands),

    /// Export expenses to a CSV file
    Export(ExportArgs),

    /// Initialize the data directory and backing file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    paths.ensure_directories()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let repository = ExpenseRepository::new(paths.expenses_file());
    let mut store = LedgerStore::open(repository)?;

    // The menu prints its own load warnings; subcommands get them here.
    if cli.command.is_some() {
        for skipped in store.skipped_rows() {
            eprintln!(
                "Warning: skipped malformed row at line {}: {}",
                skipped.line, skipped.reason
            );
        }
    }

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, &paths, cmd)?;
        }
        Some(Commands::Report { month }) => {
            handle_report_command(&store, &settings, &month)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&store, &mut settings, &paths, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&settings, &paths, cmd)?;
        }
        Some(Commands::Audit(cmd)) => {
            handle_audit_command(&paths, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&store, args)?;
        }
        Some(Commands::Init) => {
            let repository = ExpenseRepository::new(paths.expenses_file());
            if !paths.expenses_file().exists() {
                repository.save(&[])?;
            }
            settings.save(&paths)?;
            println!("Initialized expense ledger at: {}", paths.base_dir().display());
            println!("Expenses file: {}", paths.expenses_file().display());
        }
        Some(Commands::Config) => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Expenses file:    {}", paths.expenses_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Auto-backup:     {}", settings.auto_backup);
            println!("  Backups kept:    {}", settings.backup_keep);
            println!("  Expenses loaded: {}", store.len());
        }
        None => {
            run_menu(&mut store, &mut settings, &paths)?;
        }
    }

    Ok(())
}
