//! Export module for the expense tracker
//!
//! Encodes serialized expense records for consumers outside the library:
//! - JSON: machine-readable document with metadata
//! - YAML: the same document in human-readable form
//! - CSV: one row per expense (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_expenses_json, ExpenseExport, ExportMetadata, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_expenses_yaml;
