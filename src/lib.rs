//! Expense Ledger - terminal-based personal expense tracking
//!
//! This library implements a single-user expense ledger backed by one flat
//! CSV file. Records carry a stable id, a date, a category, a positive
//! amount, and an optional description; every mutation rewrites the whole
//! backing file atomically.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: the error taxonomy
//! - `models`: expense record and money types, input validation
//! - `storage`: CSV backing file with atomic rewrites
//! - `services`: ledger operations and monthly budgets
//! - `reports`: monthly aggregation
//! - `display`: terminal formatting
//! - `export`: CSV export to arbitrary targets
//! - `backup`: rolling backups of the backing file
//! - `audit`: append-only mutation log
//! - `cli`: clap handlers and the interactive menu

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult, ValidationError};
