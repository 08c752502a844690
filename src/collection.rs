//! Ordered expense collection
//!
//! Holds expenses in insertion order and offers add, remove, and exact-match
//! lookups. Lookups hand out borrows of the stored records rather than copies,
//! so changes made through `find_by_id_mut` are seen by every later read.
//!
//! There is no internal locking. Callers sharing a collection across threads
//! wrap it in their own `Mutex` or `RwLock`.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, ExpenseRecord, TimestampStyle};

/// Ordered, in-memory collection of expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseCollection {
    expenses: Vec<Expense>,
}

impl ExpenseCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense to the end of the collection
    ///
    /// Duplicate IDs are not checked.
    pub fn add(&mut self, expense: Expense) {
        tracing::debug!(id = %expense.id(), title = %expense.title(), "adding expense");
        self.expenses.push(expense);
    }

    /// Remove every expense with the given ID, returning how many were removed
    ///
    /// A missing ID leaves the collection untouched.
    pub fn remove(&mut self, id: ExpenseId) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id() != id);
        let removed = before - self.expenses.len();
        tracing::debug!(id = %id, removed, "removed expenses");
        removed
    }

    /// First expense with the given ID, in stored order
    pub fn find_by_id(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id() == id)
    }

    /// Mutable handle to the first expense with the given ID
    pub fn find_by_id_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id() == id)
    }

    /// All expenses whose title matches exactly (case-sensitive), in insertion order
    pub fn find_by_title(&self, title: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|expense| expense.title() == title)
            .collect()
    }

    /// Update an expense in place by ID
    ///
    /// Unlike `find_by_id`, a missing ID is reported as an error so callers
    /// can propagate it with `?`.
    pub fn update_expense(
        &mut self,
        id: ExpenseId,
        title: Option<&str>,
        amount: Option<f64>,
    ) -> ExpenseResult<()> {
        let expense = self
            .find_by_id_mut(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_full_string()))?;
        expense.update(title, amount);
        Ok(())
    }

    /// Serialized records for every expense, in collection order
    pub fn to_records(&self) -> Vec<ExpenseRecord> {
        self.to_records_with(TimestampStyle::default())
    }

    /// Serialized records with timestamps rendered in the given style
    pub fn to_records_with(&self, style: TimestampStyle) -> Vec<ExpenseRecord> {
        self.expenses
            .iter()
            .map(|expense| expense.to_record_with(style))
            .collect()
    }

    /// Sum of all amounts
    pub fn total_amount(&self) -> f64 {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// Number of expenses in the collection
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the collection holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Iterate over expenses in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }
}

impl<'a> IntoIterator for &'a ExpenseCollection {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}

impl Extend<Expense> for ExpenseCollection {
    fn extend<I: IntoIterator<Item = Expense>>(&mut self, iter: I) {
        for expense in iter {
            self.add(expense);
        }
    }
}

impl FromIterator<Expense> for ExpenseCollection {
    fn from_iter<I: IntoIterator<Item = Expense>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}
