//! Export functionality

pub mod csv;

pub use csv::{export_expenses_csv, export_expenses_to_path};
