//! Deterministic ordering for query results
//!
//! Ordering rules:
//! - `domain` compares lexically (byte order, case-sensitive)
//! - `standardDate` compares chronologically when both sides parse,
//!   lexically otherwise, so malformed data never fails a query
//! - ties on the primary key are broken by ascending record id, applied
//!   before direction reversal so the tie-break stays ascending under
//!   `desc` as well
//!
//! Sorting is applied to the entire filtered set before the page window,
//! which keeps pagination reproducible across repeated requests.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::LogRecord;

/// Sortable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Domain,
    StandardDate,
}

impl SortField {
    /// Parses the wire name (`domain` / `standardDate`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "domain" => Some(SortField::Domain),
            "standardDate" => Some(SortField::StandardDate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Domain => "domain",
            SortField::StandardDate => "standardDate",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses the wire name (`asc` / `desc`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// A complete sort instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Ascending sort on the given field.
    pub fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Descending sort on the given field.
    pub fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Total order over records: primary key in the requested direction,
    /// ties resolved by ascending id.
    pub fn compare(&self, a: &LogRecord, b: &LogRecord) -> Ordering {
        let primary = match self.field {
            SortField::Domain => a.domain.cmp(&b.domain),
            SortField::StandardDate => compare_dates(&a.standard_date, &b.standard_date),
        };

        let primary = match self.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };

        // Tie-break is not subject to direction reversal.
        primary.then_with(|| a.id.cmp(&b.id))
    }

    /// Sorts the full filtered set in place.
    pub fn sort(&self, records: &mut [LogRecord]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

/// Chronological comparison with lexical fallback.
fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(a_dt), Some(b_dt)) => a_dt.cmp(&b_dt),
        _ => a.cmp(b),
    }
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}
