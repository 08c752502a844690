//! Expense model
//!
//! An expense has a fixed identity and creation time, and a title and amount
//! that can change over its lifetime.

use chrono::{DateTime, Utc};
use std::fmt;

use super::ids::ExpenseId;
use super::record::{ExpenseRecord, TimestampStyle};

/// A single financial expense
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    id: ExpenseId,
    title: String,
    amount: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh ID
    ///
    /// No validation is performed on either field.
    pub fn new(title: impl Into<String>, amount: f64) -> Self {
        let now = Utc::now();
        let expense = Self {
            id: ExpenseId::new(),
            title: title.into(),
            amount,
            created_at: now,
            updated_at: now,
        };
        tracing::trace!(id = %expense.id, "expense created");
        expense
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the title and/or amount
    ///
    /// Absent fields are left alone. `updated_at` is refreshed on every call,
    /// including one with no fields, and never moves backwards.
    pub fn update(&mut self, title: Option<&str>, amount: Option<f64>) {
        if let Some(title) = title {
            self.title = title.to_string();
        }
        if let Some(amount) = amount {
            self.amount = amount;
        }
        self.updated_at = Utc::now().max(self.updated_at);
        tracing::trace!(id = %self.id, "expense updated");
    }

    /// Structured record with naive UTC timestamps
    pub fn to_record(&self) -> ExpenseRecord {
        self.to_record_with(TimestampStyle::default())
    }

    /// Structured record with timestamps rendered in the given style
    pub fn to_record_with(&self, style: TimestampStyle) -> ExpenseRecord {
        ExpenseRecord {
            id: self.id.to_full_string(),
            title: self.title.clone(),
            amount: self.amount,
            created_at: style.render(self.created_at),
            updated_at: style.render(self.updated_at),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("Coffee", 3.5);
        assert_eq!(expense.title(), "Coffee");
        assert_eq!(expense.amount(), 3.5);
        assert_eq!(expense.created_at(), expense.updated_at());
    }

    #[test]
    fn test_distinct_ids() {
        let a = Expense::new("Coffee", 3.5);
        let b = Expense::new("Coffee", 3.5);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_no_validation() {
        let expense = Expense::new("", -42.0);
        assert_eq!(expense.title(), "");
        assert_eq!(expense.amount(), -42.0);
    }

    #[test]
    fn test_update_title_only() {
        let mut expense = Expense::new("Coffee", 3.5);
        expense.update(Some("Tea"), None);
        assert_eq!(expense.title(), "Tea");
        assert_eq!(expense.amount(), 3.5);
    }

    #[test]
    fn test_update_amount_only() {
        let mut expense = Expense::new("Coffee", 3.5);
        expense.update(None, Some(4.25));
        assert_eq!(expense.title(), "Coffee");
        assert_eq!(expense.amount(), 4.25);
    }

    #[test]
    fn test_update_refreshes_timestamp() {
        let mut expense = Expense::new("Coffee", 3.5);
        let id = expense.id();
        let created = expense.created_at();
        let before = expense.updated_at();

        expense.update(None, None);

        assert_eq!(expense.title(), "Coffee");
        assert_eq!(expense.amount(), 3.5);
        assert!(expense.updated_at() >= before);
        assert!(expense.updated_at() >= created);
        assert_eq!(expense.created_at(), created);
        assert_eq!(expense.id(), id);
    }

    #[test]
    fn test_updated_at_is_monotonic() {
        let mut expense = Expense::new("Coffee", 3.5);
        let mut last = expense.updated_at();
        for amount in 0..50 {
            expense.update(None, Some(amount as f64));
            assert!(expense.updated_at() >= last);
            last = expense.updated_at();
        }
    }

    #[test]
    fn test_to_record() {
        let expense = Expense::new("Rent", 1200.0);
        let record = expense.to_record();

        assert_eq!(record.id, expense.id().to_full_string());
        assert_eq!(record.title, "Rent");
        assert_eq!(record.amount, 1200.0);
        assert_eq!(record.created_at, record.updated_at);
        assert!(NaiveDateTime::parse_from_str(&record.created_at, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
        assert!(!record.created_at.ends_with('Z'));
    }

    #[test]
    fn test_to_record_rfc3339() {
        let expense = Expense::new("Rent", 1200.0);
        let record = expense.to_record_with(TimestampStyle::Rfc3339);
        assert!(record.created_at.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&record.updated_at).is_ok());
    }

    #[test]
    fn test_to_record_is_pure() {
        let expense = Expense::new("Rent", 1200.0);
        let updated_at = expense.updated_at();
        assert_eq!(expense.to_record(), expense.to_record());
        assert_eq!(expense.updated_at(), updated_at);
    }

    #[test]
    fn test_display() {
        let expense = Expense::new("Lunch", 15.0);
        assert_eq!(expense.to_string(), "Lunch: 15");
    }
}
