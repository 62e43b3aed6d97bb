//! File-backed Log Store adapter
//!
//! Data file format: one record per line,
//!
//! ```text
//! <crc32 hex, 8 digits> TAB <record JSON>
//! ```
//!
//! The checksum covers the JSON bytes. The whole file is validated and
//! loaded at open; queries are served from that snapshot. A checksum or
//! decode failure aborts the open naming the line — corrupt data is
//! never silently skipped.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::model::LogRecord;
use crate::query::{LogFilter, PageWindow, SortSpec};

use super::checksum;
use super::errors::{StoreError, StoreResult};
use super::{select, LogStore};

/// Log Store over a checksummed line file. Natural order is file order.
#[derive(Debug)]
pub struct FileLogStore {
    path: PathBuf,
    records: Vec<LogRecord>,
}

impl FileLogStore {
    /// Loads and validates the data file.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|e| StoreError::io(path.display().to_string(), e))?;

        let mut records = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            records.push(decode_line(path, idx + 1, line)?);
        }

        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    /// Writes records in the data-file format, replacing any existing
    /// file. Used by `init`, seeding, and tests.
    pub fn write_records(path: impl AsRef<Path>, records: &[LogRecord]) -> StoreResult<()> {
        let path = path.as_ref();
        let mut out = String::new();
        for record in records {
            let json = serde_json::to_string(record)
                .map_err(|e| StoreError::corruption(path.display().to_string(), 0, e.to_string()))?;
            out.push_str(&checksum::encode(json.as_bytes()));
            out.push('\t');
            out.push_str(&json);
            out.push('\n');
        }
        fs::write(path, out).map_err(|e| StoreError::io(path.display().to_string(), e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records loaded, unfiltered.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn decode_line(path: &Path, line_no: usize, line: &str) -> StoreResult<LogRecord> {
    let path_text = path.display().to_string();
    let corrupt = |reason: String| StoreError::corruption(path_text.clone(), line_no, reason);

    let (checksum_text, json) = line
        .split_once('\t')
        .ok_or_else(|| corrupt("missing checksum field".into()))?;

    let expected =
        checksum::decode(checksum_text).ok_or_else(|| corrupt("malformed checksum".into()))?;

    if !checksum::verify(json.as_bytes(), expected) {
        return Err(corrupt("checksum mismatch".into()));
    }

    serde_json::from_str(json).map_err(|e| corrupt(e.to_string()))
}

#[async_trait]
impl LogStore for FileLogStore {
    async fn fetch(
        &self,
        filter: &LogFilter,
        sort: Option<&SortSpec>,
        window: PageWindow,
    ) -> StoreResult<Vec<LogRecord>> {
        Ok(select(&self.records, filter, sort, window))
    }

    async fn count(&self, filter: &LogFilter) -> StoreResult<usize> {
        Ok(self.records.iter().filter(|r| filter.matches(r)).count())
    }
}
