//! Storage layer: CSV backing file with atomic rewrites

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseRepository, LoadedLedger, SkippedRow};
pub use file_io::write_atomic;
