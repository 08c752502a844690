//! Core data models for the expense tracker
//!
//! This module contains the expense record, its strongly-typed identifier,
//! and the plain structured form a record serializes to.

pub mod expense;
pub mod ids;
pub mod record;

pub use expense::Expense;
pub use ids::ExpenseId;
pub use record::{ExpenseRecord, TimestampStyle};
