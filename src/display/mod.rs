//! Display formatting for terminal output

pub mod expense;

pub use expense::{
    format_category_filter, format_expense_details, format_expense_row, format_expense_table,
    format_monthly_report,
};
