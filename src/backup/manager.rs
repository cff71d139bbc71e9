//! Backup manager
//!
//! Keeps timestamped copies of the backing expenses file with a simple
//! keep-last-N retention policy. Backups are plain copies of the CSV, so
//! restoring is copying a file back by hand.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{LedgerError, LedgerResult};

const BACKUP_PREFIX: &str = "expenses-";
const BACKUP_EXT: &str = "csv";
const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Metadata about one backup file
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to the backup
    pub path: PathBuf,
    /// When the backup was created (parsed from the filename)
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    keep: usize,
}

impl BackupManager {
    /// Create a manager writing into `backup_dir`, keeping `keep` backups
    pub fn new(backup_dir: PathBuf, keep: usize) -> Self {
        Self { backup_dir, keep }
    }

    /// Copy the backing file into the backup directory and prune old backups
    ///
    /// Returns the path of the created backup. A missing backing file (no
    /// expenses recorded yet) creates nothing and returns `None`.
    pub fn create_backup(&self, expenses_file: &Path) -> LedgerResult<Option<PathBuf>> {
        if !expenses_file.exists() {
            return Ok(None);
        }

        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create backup directory: {}", e)))?;

        let now = Utc::now();
        let filename = format!(
            "{}{}-{:03}.{}",
            BACKUP_PREFIX,
            now.format(TIMESTAMP_FORMAT),
            now.timestamp_subsec_millis(),
            BACKUP_EXT
        );
        let backup_path = self.backup_dir.join(&filename);

        fs::copy(expenses_file, &backup_path)
            .map_err(|e| LedgerError::Io(format!("Failed to write backup file: {}", e)))?;

        self.prune()?;

        Ok(Some(backup_path))
    }

    /// List all backups, newest first
    pub fn list_backups(&self) -> LedgerResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        let entries = fs::read_dir(&self.backup_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to read backup directory: {}", e)))?;

        for entry in entries {
            let entry = entry
                .map_err(|e| LedgerError::Io(format!("Failed to read directory entry: {}", e)))?;
            if let Some(info) = parse_backup_info(&entry.path()) {
                backups.push(info);
            }
        }

        // Filenames encode the full timestamp, so they break any remaining tie
        backups.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.filename.cmp(&a.filename))
        });
        Ok(backups)
    }

    /// Delete backups beyond the retention count (oldest first)
    fn prune(&self) -> LedgerResult<()> {
        let backups = self.list_backups()?;
        for old in backups.iter().skip(self.keep) {
            fs::remove_file(&old.path)
                .map_err(|e| LedgerError::Io(format!("Failed to remove old backup: {}", e)))?;
        }
        Ok(())
    }
}

/// Parse backup metadata from a filename like `expenses-20231005-120000-123.csv`
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();

    let stem = filename
        .strip_prefix(BACKUP_PREFIX)?
        .strip_suffix(&format!(".{}", BACKUP_EXT))?;

    let (timestamp, millis) = stem.rsplit_once('-')?;
    let millis: i64 = millis.parse().ok()?;
    let naive = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;
    let created_at =
        DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc) + chrono::Duration::milliseconds(millis);

    let metadata = fs::metadata(path).ok()?;

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes: metadata.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf, BackupManager) {
        let temp_dir = TempDir::new().unwrap();
        let expenses = temp_dir.path().join("expenses.csv");
        fs::write(&expenses, "id,date,category,amount,description\n").unwrap();
        let manager = BackupManager::new(temp_dir.path().join("backups"), 3);
        (temp_dir, expenses, manager)
    }

    #[test]
    fn test_backup_copies_file() {
        let (_temp_dir, expenses, manager) = setup();

        let backup = manager.create_backup(&expenses).unwrap().unwrap();
        assert!(backup.exists());
        assert_eq!(fs::read(&backup).unwrap(), fs::read(&expenses).unwrap());
    }

    #[test]
    fn test_backup_of_missing_file_is_noop() {
        let (temp_dir, _expenses, manager) = setup();
        let missing = temp_dir.path().join("nope.csv");

        assert!(manager.create_backup(&missing).unwrap().is_none());
        assert!(manager.list_backups().unwrap().is_empty());
    }

    #[test]
    fn test_retention_prunes_oldest() {
        let (_temp_dir, expenses, manager) = setup();

        for _ in 0..5 {
            manager.create_backup(&expenses).unwrap();
            // Distinct timestamps keep the ordering deterministic
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        let backups = manager.list_backups().unwrap();
        assert_eq!(backups.len(), 3);
        // Newest first
        assert!(backups[0].created_at >= backups[1].created_at);
        assert!(backups[1].created_at >= backups[2].created_at);
    }

    #[test]
    fn test_same_second_backups_keep_millisecond_order() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("backups");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("expenses-20231005-120000-100.csv"), "old").unwrap();
        fs::write(dir.join("expenses-20231005-120000-900.csv"), "new").unwrap();

        let manager = BackupManager::new(dir, 1);

        let backups = manager.list_backups().unwrap();
        assert_eq!(backups[0].filename, "expenses-20231005-120000-900.csv");
        assert!(backups[0].created_at > backups[1].created_at);

        // Retention must drop the older backup, not the newer one
        manager.prune().unwrap();
        let remaining = manager.list_backups().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].filename, "expenses-20231005-120000-900.csv");
    }

    #[test]
    fn test_list_ignores_unrelated_files() {
        let (_temp_dir, expenses, manager) = setup();
        manager.create_backup(&expenses).unwrap();

        fs::write(manager.backup_dir.join("notes.txt"), "hi").unwrap();
        fs::write(manager.backup_dir.join("expenses-garbage.csv"), "hi").unwrap();

        assert_eq!(manager.list_backups().unwrap().len(), 1);
    }
}
