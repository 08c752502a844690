//! Expense Tracker - in-memory personal expense records
//!
//! This library provides a small core for tracking personal expenses: a
//! record type with a stable identity and mutable content, and an ordered
//! collection supporting add, remove, and exact-match lookups.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, identifiers, and serialized records
//! - `collection`: Ordered expense collection
//! - `export`: JSON, YAML, and CSV export of serialized records
//! - `display`: Plain-text formatting for terminal output
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::{Expense, ExpenseCollection};
//!
//! let mut expenses = ExpenseCollection::new();
//! let lunch = Expense::new("Lunch", 15.0);
//! let id = lunch.id();
//! expenses.add(lunch);
//!
//! if let Some(expense) = expenses.find_by_id_mut(id) {
//!     expense.update(None, Some(18.5));
//! }
//! assert_eq!(expenses.find_by_id(id).map(|e| e.amount()), Some(18.5));
//! ```

pub mod collection;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;

pub use collection::ExpenseCollection;
pub use error::{ExpenseError, ExpenseResult};
pub use models::{Expense, ExpenseId, ExpenseRecord, TimestampStyle};
