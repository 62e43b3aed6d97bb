//! In-memory Log Store adapter
//!
//! Records live behind an RwLock so tests can interleave inserts with
//! reads. Natural order is insertion order.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::LogRecord;
use crate::query::{LogFilter, PageWindow, SortSpec};

use super::errors::StoreResult;
use super::{select, LogStore};

/// Log Store over a vector of records.
#[derive(Debug, Default)]
pub struct MemoryLogStore {
    records: RwLock<Vec<LogRecord>>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the given records.
    pub fn with_records(records: Vec<LogRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Appends a record; visible to subsequent reads.
    pub async fn insert(&self, record: LogRecord) {
        self.records.write().await.push(record);
    }

    /// Number of records held, unfiltered.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn fetch(
        &self,
        filter: &LogFilter,
        sort: Option<&SortSpec>,
        window: PageWindow,
    ) -> StoreResult<Vec<LogRecord>> {
        let records = self.records.read().await;
        Ok(select(&records, filter, sort, window))
    }

    async fn count(&self, filter: &LogFilter) -> StoreResult<usize> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| filter.matches(r)).count())
    }
}
