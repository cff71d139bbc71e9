//! Audit log CLI commands

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::LedgerPaths;
use crate::error::LedgerResult;

/// Audit subcommands
#[derive(Subcommand)]
pub enum AuditCommands {
    /// Show recorded mutations, oldest first
    List,
}

/// Handle an audit command
pub fn handle_audit_command(paths: &LedgerPaths, cmd: AuditCommands) -> LedgerResult<()> {
    match cmd {
        AuditCommands::List => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_all()?;

            if entries.is_empty() {
                println!("No audit entries recorded.");
                return Ok(());
            }

            for entry in entries {
                println!(
                    "{}  {:10}  {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
                    entry.operation.to_string(),
                    entry.detail
                );
            }
        }
    }

    Ok(())
}
