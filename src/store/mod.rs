//! Log Store abstraction and adapters
//!
//! The store is a read-only capability: filtered count plus filtered,
//! sorted, windowed fetch. Any storage technology can satisfy it; two
//! adapters ship here:
//! - [`MemoryLogStore`]: records in memory, insertable, used by the
//!   engine's own tests and for reads concurrent with writes
//! - [`FileLogStore`]: a checksummed line file loaded at open
//!
//! Adapters apply the sort to the entire filtered set before windowing,
//! so a page boundary can never split ties inconsistently.

mod checksum;
mod errors;
mod file;
mod memory;

use async_trait::async_trait;

use crate::model::LogRecord;
use crate::query::{LogFilter, PageWindow, SortSpec};

pub use errors::{StoreError, StoreResult};
pub use file::FileLogStore;
pub use memory::MemoryLogStore;

/// Read-only record collection capability.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Records matching the filter, in the requested order (or the
    /// store's natural order), windowed by offset/limit.
    async fn fetch(
        &self,
        filter: &LogFilter,
        sort: Option<&SortSpec>,
        window: PageWindow,
    ) -> StoreResult<Vec<LogRecord>>;

    /// Count of all records matching the filter, ignoring the window.
    async fn count(&self, filter: &LogFilter) -> StoreResult<usize>;
}

/// Shared filter/sort/window evaluation over an in-memory snapshot.
fn select(
    records: &[LogRecord],
    filter: &LogFilter,
    sort: Option<&SortSpec>,
    window: PageWindow,
) -> Vec<LogRecord> {
    let mut matched: Vec<LogRecord> = records.iter().filter(|r| filter.matches(r)).cloned().collect();
    if let Some(sort) = sort {
        sort.sort(&mut matched);
    }
    window.slice(matched)
}
