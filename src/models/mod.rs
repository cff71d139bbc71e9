//! Core data models for the expense ledger

pub mod expense;
pub mod money;

pub use expense::{
    normalize_category, parse_amount, parse_date, parse_month, ExpenseRecord, DATE_FORMAT,
};
pub use money::{Money, MoneyParseError};
