//! Serialized expense records
//!
//! `ExpenseRecord` is the plain structured form of an expense, with
//! timestamps already rendered to text. It is what export formats encode.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// How timestamps are rendered in serialized records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimestampStyle {
    /// UTC wall clock without an offset marker (`2025-01-15T09:30:00.123456`)
    #[default]
    NaiveUtc,
    /// RFC 3339 with a `Z` suffix (`2025-01-15T09:30:00.123456Z`)
    Rfc3339,
}

impl TimestampStyle {
    /// Render a timestamp in this style, always with microsecond precision
    pub fn render(&self, at: DateTime<Utc>) -> String {
        match self {
            Self::NaiveUtc => at.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            Self::Rfc3339 => at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// Plain structured representation of one expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Full hyphenated UUID
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub created_at: String,
    pub updated_at: String,
}
