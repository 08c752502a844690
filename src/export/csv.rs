//! CSV Export functionality
//!
//! One row per expense in collection order, with the serialized record's
//! fields as columns.

use std::io::Write;

use crate::collection::ExpenseCollection;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::TimestampStyle;

/// Export a collection to CSV
pub fn export_expenses_csv<W: Write>(
    collection: &ExpenseCollection,
    writer: &mut W,
    style: TimestampStyle,
) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // Header is written even for an empty collection
    csv_writer
        .write_record(["id", "title", "amount", "created_at", "updated_at"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in collection {
        let record = expense.to_record_with(style);
        csv_writer
            .write_record([
                record.id,
                record.title,
                record.amount.to_string(),
                record.created_at,
                record.updated_at,
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    tracing::debug!(count = collection.len(), "exported expenses as CSV");
    Ok(())
}
