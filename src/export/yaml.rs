//! YAML Export functionality
//!
//! Writes the same document as the JSON export, preceded by a comment header.

use std::io::Write;

use crate::collection::ExpenseCollection;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::models::TimestampStyle;

/// Export a collection to YAML
pub fn export_expenses_yaml<W: Write>(
    collection: &ExpenseCollection,
    writer: &mut W,
    style: TimestampStyle,
) -> ExpenseResult<()> {
    let export = ExpenseExport::from_collection(collection, style);

    write_header(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    tracing::debug!(count = export.metadata.expense_count, "exported expenses as YAML");
    Ok(())
}

fn write_header<W: Write>(writer: &mut W, export: &ExpenseExport) -> std::io::Result<()> {
    writeln!(writer, "# Expense Tracker Export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# Version: {}", export.app_version)?;
    writeln!(writer)
}
