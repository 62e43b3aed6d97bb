//! Request normalization: raw parameters to a validated QuerySpec
//!
//! Input arrives as loose strings (HTTP query parameters or CLI flags).
//! Normalization policy, preserving the observed upstream behavior:
//! - `skip`/`take` fall back to defaults on absent or malformed values
//!   (silent coercion, never an error); `take=0` is folded into the same
//!   path so the limit is always positive
//! - `statuses` is comma-split; unknown tokens are skipped (they could
//!   never match a record); absent or empty input yields an empty set
//! - `orderBy` and `orderDirection` must both be present to produce a
//!   sort instruction; a present but unrecognized value fails validation
//! - `search` passes through verbatim; empty means no text filter

use std::collections::HashSet;

use serde::Deserialize;

use crate::model::LogStatus;

use super::errors::{EngineResult, QueryError};
use super::paginator::{PageWindow, DEFAULT_LIMIT};
use super::sorter::{SortDirection, SortField, SortSpec};

/// Raw request parameters, all optional strings.
///
/// Field names match the wire surface (`orderBy`, `orderDirection`), so
/// this deserializes directly from the HTTP query string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuery {
    pub search: Option<String>,
    pub order_by: Option<String>,
    pub order_direction: Option<String>,
    pub skip: Option<String>,
    pub take: Option<String>,
    pub statuses: Option<String>,
}

/// A validated, normalized query. Constructed fresh per request.
#[derive(Debug, Clone)]
pub struct QuerySpec {
    /// Case-sensitive substring filter; None means no text filter
    pub search: Option<String>,
    /// Status filter; an empty set matches nothing (documented contract)
    pub statuses: HashSet<LogStatus>,
    /// Sort instruction; None means Log Store natural order
    pub sort: Option<SortSpec>,
    /// Pagination window
    pub window: PageWindow,
}

impl QuerySpec {
    /// Validates and normalizes raw parameters.
    pub fn parse(raw: &RawQuery) -> EngineResult<Self> {
        let offset = parse_count(raw.skip.as_deref()).unwrap_or(0);
        let limit = parse_count(raw.take.as_deref())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_LIMIT);

        let search = raw
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        let statuses = parse_statuses(raw.statuses.as_deref());

        let field = raw
            .order_by
            .as_deref()
            .map(|s| SortField::parse(s).ok_or_else(|| QueryError::validation("invalid sort field")))
            .transpose()?;
        let direction = raw
            .order_direction
            .as_deref()
            .map(|s| {
                SortDirection::parse(s)
                    .ok_or_else(|| QueryError::validation("invalid sort direction"))
            })
            .transpose()?;

        // A sort instruction requires both halves; a lone field or
        // direction is ignored.
        let sort = match (field, direction) {
            (Some(field), Some(direction)) => Some(SortSpec::new(field, direction)),
            _ => None,
        };

        Ok(Self {
            search,
            statuses,
            sort,
            window: PageWindow::new(offset, limit),
        })
    }
}

/// Integer text to count; None on absent or malformed input.
fn parse_count(value: Option<&str>) -> Option<usize> {
    value.and_then(|s| s.trim().parse::<usize>().ok())
}

/// Comma-split status list; unknown and empty tokens are skipped.
fn parse_statuses(value: Option<&str>) -> HashSet<LogStatus> {
    value
        .unwrap_or("")
        .split(',')
        .filter_map(|token| LogStatus::parse(token.trim()))
        .collect()
}
