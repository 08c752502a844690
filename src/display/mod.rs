//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses as plain text, for embedding
//! applications that print to a terminal.

pub mod expense;

pub use expense::{format_amount, format_expense_details, format_expense_register, format_expense_row};
