//! Expense display formatting
//!
//! Register-style listing and a detail view. Dates, currency symbol and
//! timestamp style come from `Settings`. An invalid date format falls back
//! to `%Y-%m-%d` rather than failing.

use crate::collection::ExpenseCollection;
use crate::config::Settings;
use crate::models::Expense;

const TITLE_WIDTH: usize = 24;

/// Format an amount with the configured currency symbol and two decimals
pub fn format_amount(amount: f64, settings: &Settings) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", settings.currency_symbol, amount.abs())
    } else {
        format!("{}{:.2}", settings.currency_symbol, amount)
    }
}

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{:10} {:width$} {:>12} {}",
        expense.created_at().format(settings.display_date_format()),
        truncate(expense.title(), TITLE_WIDTH),
        format_amount(expense.amount(), settings),
        expense.id(),
        width = TITLE_WIDTH
    )
}

/// Format a collection as a register with a total line
pub fn format_expense_register(collection: &ExpenseCollection, settings: &Settings) -> String {
    if collection.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:width$} {:>12} {}\n",
        "Date",
        "Title",
        "Amount",
        "ID",
        width = TITLE_WIDTH
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for expense in collection {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "{:10} {:width$} {:>12}\n",
        "",
        format!("Total ({})", collection.len()),
        format_amount(collection.total_amount(), settings),
        width = TITLE_WIDTH
    ));

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let style = settings.timestamp_style;
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.id()));
    output.push_str(&format!("Title:   {}\n", expense.title()));
    output.push_str(&format!("Amount:  {}\n", format_amount(expense.amount(), settings)));
    output.push_str(&format!("Created: {}\n", style.render(expense.created_at())));
    if expense.updated_at() != expense.created_at() {
        output.push_str(&format!("Updated: {}\n", style.render(expense.updated_at())));
    }

    output
}

/// Truncate a string to max length, appending "..." when cut
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
