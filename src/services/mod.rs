//! Business logic layer

pub mod budget;
pub mod ledger;

pub use budget::{budget_status, check_exceeded, BudgetStatus};
pub use ledger::{CategoryFilter, LedgerStore, SearchFilter};
