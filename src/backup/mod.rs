//! Backup management for the backing file

pub mod manager;

pub use manager::{BackupInfo, BackupManager};
