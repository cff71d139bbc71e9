//! Error types for the expense ledger
//!
//! Defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Input validation failures for a new expense
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date string did not parse as a real YYYY-MM-DD calendar date
    #[error("Invalid date '{0}': expected a real date in YYYY-MM-DD format")]
    BadDate(String),

    /// Amount did not parse, or was not strictly positive
    #[error("Invalid amount '{0}': expected a positive number like 12.50")]
    BadAmount(String),

    /// Category was empty (or whitespace only)
    #[error("Category must not be empty")]
    EmptyCategory,
}

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Rejected input for a new expense
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No expense with the given identifier exists
    #[error("Expense not found: #{id}")]
    NotFound { id: u64 },

    /// Backing file could not be read or rewritten
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the backing file itself
    #[error("I/O error: {0}")]
    Io(String),

    /// Export target problems
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a "not found" error for an expense id
    pub fn expense_not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
