//! User settings for the expense ledger
//!
//! Manages user preferences: currency symbol, date format, default category
//! suggestions, monthly budgets, and backup behavior. Stored as
//! `config.json` in the base directory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::Money;

/// Budgets keyed by month ("YYYY-MM"), then by category
pub type BudgetTable = BTreeMap<String, BTreeMap<String, Money>>;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format (strftime); the ledger itself always uses YYYY-MM-DD
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Category suggestions offered at entry time
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Monthly per-category spending limits
    #[serde(default)]
    pub budgets: BudgetTable,

    /// Whether to back up the expenses file on every mutation
    #[serde(default = "default_auto_backup")]
    pub auto_backup: bool,

    /// How many backup files to keep
    #[serde(default = "default_backup_keep")]
    pub backup_keep: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_categories() -> Vec<String> {
    [
        "food",
        "transport",
        "bills",
        "entertainment",
        "shopping",
        "healthcare",
        "education",
        "travel",
        "rent",
        "utilities",
        "other",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_auto_backup() -> bool {
    true
}

fn default_backup_keep() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            categories: default_categories(),
            budgets: BudgetTable::new(),
            auto_backup: default_auto_backup(),
            backup_keep: default_backup_keep(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            let settings = Self::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Config(format!("Failed to read settings: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), json)
            .map_err(|e| LedgerError::Config(format!("Failed to write settings: {}", e)))
    }

    /// Look up the budget limit for a month ("YYYY-MM") and category
    pub fn budget_limit(&self, month: &str, category: &str) -> Option<Money> {
        self.budgets.get(month).and_then(|m| m.get(category)).copied()
    }

    /// Set (or replace) the budget limit for a month and category
    pub fn set_budget(&mut self, month: String, category: String, limit: Money) {
        self.budgets.entry(month).or_default().insert(category, limit);
    }
}
