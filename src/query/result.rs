//! Result shape for query execution

use serde::Serialize;

use crate::model::LogRecord;

/// One page of matching records plus the filter-wide match count.
///
/// Serializes to the wire response shape: `{"logs": [...], "total": n}`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    /// Records of the requested page, in final order
    pub logs: Vec<LogRecord>,
    /// Count of all records matching the filter, independent of paging
    pub total: usize,
}

impl QueryResult {
    pub fn new(logs: Vec<LogRecord>, total: usize) -> Self {
        Self { logs, total }
    }

    /// A result with no matches.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Number of records on this page (not the total).
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}
