//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Each handler
//! validates through the services, prints results, and records mutations
//! in the audit log (plus an automatic backup when enabled).

pub mod audit;
pub mod backup;
pub mod budget;
pub mod expense;
pub mod export;
pub mod menu;
pub mod report;

pub use audit::{handle_audit_command, AuditCommands};
pub use backup::{handle_backup_command, BackupCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use menu::run_menu;
pub use report::handle_report_command;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::backup::BackupManager;
use crate::config::{LedgerPaths, Settings};

/// Record a successful mutation: audit entry plus optional auto-backup
///
/// The mutation itself has already been persisted; failures here are
/// warnings, not errors.
pub(crate) fn record_mutation(
    paths: &LedgerPaths,
    settings: &Settings,
    operation: Operation,
    detail: String,
) {
    let logger = AuditLogger::new(paths.audit_log());
    if let Err(err) = logger.log(&AuditEntry::now(operation, detail)) {
        eprintln!("Warning: could not write audit log: {}", err);
    }

    if settings.auto_backup {
        let manager = BackupManager::new(paths.backup_dir(), settings.backup_keep);
        if let Err(err) = manager.create_backup(&paths.expenses_file()) {
            eprintln!("Warning: could not create backup: {}", err);
        }
    }
}
