//! Page windowing over the filtered, sorted set
//!
//! The window is applied after filtering and sorting; an offset at or
//! past the end of the set yields an empty page, never an error.

use crate::model::LogRecord;

/// Default page size when `take` is absent or malformed.
pub const DEFAULT_LIMIT: usize = 10;

/// An offset/limit window, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

impl PageWindow {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// The first page with the default size.
    pub fn first() -> Self {
        Self::new(0, DEFAULT_LIMIT)
    }

    /// Applies the window to an already filtered and sorted set.
    pub fn slice(&self, records: Vec<LogRecord>) -> Vec<LogRecord> {
        records
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::first()
    }
}
