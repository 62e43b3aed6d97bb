//! Log record model
//!
//! The record value served by every Log Store adapter. Records are
//! immutable once stored; the query engine never mutates them.
//!
//! Serialization keeps the upstream wire names (`dateOriginal`,
//! `standardDate`, `NOT_ADDED`, ...) so existing consumers of the
//! `/logs` endpoint keep working unchanged.

use serde::{Deserialize, Serialize};

/// Processing status of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogStatus {
    /// Domain was added to the tracked set
    Added,
    /// Domain was seen but not added
    NotAdded,
    /// Entry flagged as a bug
    Bug,
    /// Entry flagged as malformed input
    Disorder,
}

impl LogStatus {
    /// All statuses, in declaration order.
    pub const ALL: [LogStatus; 4] = [
        LogStatus::Added,
        LogStatus::NotAdded,
        LogStatus::Bug,
        LogStatus::Disorder,
    ];

    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Added => "ADDED",
            LogStatus::NotAdded => "NOT_ADDED",
            LogStatus::Bug => "BUG",
            LogStatus::Disorder => "DISORDER",
        }
    }

    /// Parses the wire representation. Returns None for unknown tokens.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ADDED" => Some(LogStatus::Added),
            "NOT_ADDED" => Some(LogStatus::NotAdded),
            "BUG" => Some(LogStatus::Bug),
            "DISORDER" => Some(LogStatus::Disorder),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One immutable log entry.
///
/// `standard_date` is the normalized date used for chronological sort;
/// `date_original` preserves whatever the source system recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Unique, stable identifier
    pub id: i64,
    /// Date text as recorded by the source system
    pub date_original: String,
    /// Domain the entry refers to
    pub domain: String,
    /// Processing status
    pub status: LogStatus,
    /// Free-form description
    pub description: String,
    /// Normalized date used for chronological sort
    pub standard_date: String,
}

impl LogRecord {
    /// Creates a new record.
    pub fn new(
        id: i64,
        date_original: impl Into<String>,
        domain: impl Into<String>,
        status: LogStatus,
        description: impl Into<String>,
        standard_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date_original: date_original.into(),
            domain: domain.into(),
            status,
            description: description.into(),
            standard_date: standard_date.into(),
        }
    }
}
