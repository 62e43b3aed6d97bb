//! Query engine orchestration
//!
//! Execution flow (strict order per request):
//! 1. Compose the combined filter predicate from the spec
//! 2. Issue the windowed fetch and the filtered count against the Log
//!    Store in parallel (both read-only, neither depends on the other)
//! 3. Shape the result: page records plus filter-wide total
//!
//! The engine holds no mutable state, so any number of requests may
//! execute concurrently. Cancellation propagates by dropping the
//! future; no partial results escape.

use std::sync::Arc;

use crate::observability::Logger;
use crate::store::LogStore;

use super::errors::EngineResult;
use super::filters::LogFilter;
use super::result::QueryResult;
use super::spec::QuerySpec;

/// Stateless facade over a Log Store.
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<dyn LogStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }

    /// Runs one validated query: filtered, sorted, windowed page plus
    /// the total match count over the same predicate.
    pub async fn execute(&self, spec: &QuerySpec) -> EngineResult<QueryResult> {
        let filter = LogFilter::from_spec(spec);

        let (page, total) = tokio::join!(
            self.store.fetch(&filter, spec.sort.as_ref(), spec.window),
            self.store.count(&filter),
        );
        let mut logs = page?;
        let total = total?;

        // The two store calls are not one snapshot; a write landing
        // between them may skew the total, which callers tolerate. An
        // oversized page would be an impossible state, so clamp it.
        if logs.len() > spec.window.limit {
            logs.truncate(spec.window.limit);
        }

        let (returned, total_text) = (logs.len().to_string(), total.to_string());
        let (offset, limit) = (
            spec.window.offset.to_string(),
            spec.window.limit.to_string(),
        );
        Logger::info(
            "QUERY_EXECUTED",
            &[
                ("returned", returned.as_str()),
                ("total", total_text.as_str()),
                ("offset", offset.as_str()),
                ("limit", limit.as_str()),
            ],
        );

        Ok(QueryResult::new(logs, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LogRecord, LogStatus};
    use crate::query::paginator::PageWindow;
    use crate::query::sorter::SortSpec;
    use crate::query::spec::{QuerySpec, RawQuery};
    use crate::store::{StoreError, StoreResult};
    use async_trait::async_trait;

    /// Mock store serving a fixed record set, with switchable failure
    /// and an optional oversized-page fault.
    struct MockStore {
        records: Vec<LogRecord>,
        fail: bool,
        ignore_window: bool,
    }

    impl MockStore {
        fn with_records(records: Vec<LogRecord>) -> Self {
            Self {
                records,
                fail: false,
                ignore_window: false,
            }
        }

        fn failing() -> Self {
            Self {
                records: Vec::new(),
                fail: true,
                ignore_window: false,
            }
        }
    }

    #[async_trait]
    impl LogStore for MockStore {
        async fn fetch(
            &self,
            filter: &LogFilter,
            sort: Option<&SortSpec>,
            window: PageWindow,
        ) -> StoreResult<Vec<LogRecord>> {
            if self.fail {
                return Err(StoreError::corruption("mock", 1, "injected"));
            }
            let mut matched: Vec<LogRecord> = self
                .records
                .iter()
                .filter(|r| filter.matches(r))
                .cloned()
                .collect();
            if let Some(sort) = sort {
                sort.sort(&mut matched);
            }
            if self.ignore_window {
                Ok(matched)
            } else {
                Ok(window.slice(matched))
            }
        }

        async fn count(&self, filter: &LogFilter) -> StoreResult<usize> {
            if self.fail {
                return Err(StoreError::corruption("mock", 1, "injected"));
            }
            Ok(self.records.iter().filter(|r| filter.matches(r)).count())
        }
    }

    fn sample_records() -> Vec<LogRecord> {
        vec![
            LogRecord::new(1, "", "a.com", LogStatus::Bug, "", "2024-01-03"),
            LogRecord::new(2, "", "b.com", LogStatus::Added, "", "2024-01-01"),
            LogRecord::new(3, "", "abc.com", LogStatus::Bug, "", "2024-01-02"),
        ]
    }

    fn parse(raw: RawQuery) -> QuerySpec {
        QuerySpec::parse(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_search_status_and_sort_pipeline() {
        let engine = QueryEngine::new(Arc::new(MockStore::with_records(sample_records())));
        let spec = parse(RawQuery {
            search: Some("a".into()),
            statuses: Some("BUG".into()),
            order_by: Some("domain".into()),
            order_direction: Some("asc".into()),
            ..RawQuery::default()
        });

        let result = engine.execute(&spec).await.unwrap();

        let ids: Vec<_> = result.logs.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 3], "a.com sorts before abc.com");
        assert_eq!(result.total, 2);
    }

    #[tokio::test]
    async fn test_empty_status_set_yields_empty_result() {
        let engine = QueryEngine::new(Arc::new(MockStore::with_records(sample_records())));
        let spec = parse(RawQuery::default());

        let result = engine.execute(&spec).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total, 0);
    }

    #[tokio::test]
    async fn test_total_ignores_window() {
        let engine = QueryEngine::new(Arc::new(MockStore::with_records(sample_records())));
        let spec = parse(RawQuery {
            statuses: Some("BUG,ADDED".into()),
            take: Some("1".into()),
            ..RawQuery::default()
        });

        let result = engine.execute(&spec).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.total, 3);
    }

    #[tokio::test]
    async fn test_offset_past_total_is_empty_page() {
        let engine = QueryEngine::new(Arc::new(MockStore::with_records(sample_records())));
        let spec = parse(RawQuery {
            statuses: Some("BUG".into()),
            skip: Some("10".into()),
            ..RawQuery::default()
        });

        let result = engine.execute(&spec).await.unwrap();
        assert!(result.logs.is_empty());
        assert_eq!(result.total, 2);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let engine = QueryEngine::new(Arc::new(MockStore::failing()));
        let spec = parse(RawQuery {
            statuses: Some("BUG".into()),
            ..RawQuery::default()
        });

        let err = engine.execute(&spec).await.unwrap_err();
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn test_oversized_page_is_clamped_to_limit() {
        let mut store = MockStore::with_records(sample_records());
        store.ignore_window = true;
        let engine = QueryEngine::new(Arc::new(store));
        let spec = parse(RawQuery {
            statuses: Some("BUG,ADDED".into()),
            take: Some("2".into()),
            ..RawQuery::default()
        });

        let result = engine.execute(&spec).await.unwrap();
        assert_eq!(result.len(), 2, "engine must never return more than limit");
    }
}
