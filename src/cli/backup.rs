//! Backup CLI commands

use clap::Subcommand;

use crate::backup::BackupManager;
use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a backup of the expenses file now
    Create,
    /// List available backups
    List,
}

/// Handle a backup command
pub fn handle_backup_command(
    settings: &Settings,
    paths: &LedgerPaths,
    cmd: BackupCommands,
) -> LedgerResult<()> {
    let manager = BackupManager::new(paths.backup_dir(), settings.backup_keep);

    match cmd {
        BackupCommands::Create => match manager.create_backup(&paths.expenses_file())? {
            Some(path) => println!("Backup created: {}", path.display()),
            None => println!("Nothing to back up yet."),
        },
        BackupCommands::List => {
            let backups = manager.list_backups()?;
            if backups.is_empty() {
                println!("No backups found.");
                return Ok(());
            }

            println!("{:30} {:>10}  Created", "Backup", "Size");
            for info in backups {
                println!(
                    "{:30} {:>10}  {}",
                    info.filename,
                    format!("{} B", info.size_bytes),
                    info.created_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
            }
        }
    }

    Ok(())
}
