//! JSON Export functionality
//!
//! Exports a collection's serialized records with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::collection::ExpenseCollection;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, TimestampStyle};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export document wrapping the serialized expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Library version that created the export
    pub app_version: String,

    /// Serialized expenses, in collection order
    pub expenses: Vec<ExpenseRecord>,

    pub metadata: ExportMetadata,
}

/// Summary of the exported expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    pub total_amount: f64,

    /// Creation time of the oldest expense, rendered like the records
    pub earliest_created: Option<String>,

    /// Creation time of the newest expense, rendered like the records
    pub latest_created: Option<String>,
}

impl ExpenseExport {
    /// Build an export document from a collection
    pub fn from_collection(collection: &ExpenseCollection, style: TimestampStyle) -> Self {
        let earliest_created = collection
            .iter()
            .map(|e| e.created_at())
            .min()
            .map(|at| style.render(at));

        let latest_created = collection
            .iter()
            .map(|e| e.created_at())
            .max()
            .map(|at| style.render(at));

        let metadata = ExportMetadata {
            expense_count: collection.len(),
            total_amount: collection.total_amount(),
            earliest_created,
            latest_created,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: collection.to_records_with(style),
            metadata,
        }
    }
}

/// Export a collection to JSON
///
/// JSON has no representation for NaN or infinity, so a non-finite amount
/// (or total) is an export error rather than a silent `null`.
pub fn export_expenses_json<W: Write>(
    collection: &ExpenseCollection,
    writer: &mut W,
    pretty: bool,
    style: TimestampStyle,
) -> ExpenseResult<()> {
    let export = ExpenseExport::from_collection(collection, style);
    check_finite_amounts(&export)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    tracing::debug!(count = export.metadata.expense_count, "exported expenses as JSON");
    Ok(())
}

fn check_finite_amounts(export: &ExpenseExport) -> ExpenseResult<()> {
    if let Some(record) = export.expenses.iter().find(|r| !r.amount.is_finite()) {
        return Err(ExpenseError::Export(format!(
            "Amount of expense {} is not a finite number: {}",
            record.id, record.amount
        )));
    }

    if !export.metadata.total_amount.is_finite() {
        return Err(ExpenseError::Export(format!(
            "Total amount is not a finite number: {}",
            export.metadata.total_amount
        )));
    }

    Ok(())
}
