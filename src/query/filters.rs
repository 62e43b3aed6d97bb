//! Predicate composition for query execution
//!
//! A `LogFilter` is the single boolean predicate both Log Store calls of
//! one request evaluate, so the page and the total always describe the
//! same set. It is the AND of two parts:
//! - search: case-sensitive substring of domain, description, or the
//!   status wire text; an empty term matches everything
//! - status: membership in the requested set; an empty set matches
//!   nothing (documented contract, see QuerySpec)

use std::collections::HashSet;

use crate::model::{LogRecord, LogStatus};

use super::spec::QuerySpec;

/// Combined filter predicate over a record.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    search: Option<String>,
    statuses: HashSet<LogStatus>,
}

impl LogFilter {
    /// Builds the predicate encoded by a validated spec.
    pub fn from_spec(spec: &QuerySpec) -> Self {
        Self {
            search: spec.search.clone(),
            statuses: spec.statuses.clone(),
        }
    }

    /// Direct construction, used by adapters' tests.
    pub fn new(search: Option<String>, statuses: HashSet<LogStatus>) -> Self {
        Self { search, statuses }
    }

    /// Evaluates the combined predicate against one record.
    pub fn matches(&self, record: &LogRecord) -> bool {
        self.matches_status(record) && self.matches_search(record)
    }

    fn matches_status(&self, record: &LogRecord) -> bool {
        self.statuses.contains(&record.status)
    }

    fn matches_search(&self, record: &LogRecord) -> bool {
        match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                record.domain.contains(term)
                    || record.description.contains(term)
                    || record.status.as_str().contains(term)
            }
        }
    }
}
