//! Aggregate reports over the ledger

pub mod monthly;

pub use monthly::MonthlyReport;
