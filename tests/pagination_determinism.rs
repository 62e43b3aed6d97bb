//! Pagination determinism tests
//!
//! Sorting happens logically over the entire filtered set before the
//! window is applied, with ties broken by ascending id. These tests
//! walk page sequences and check that boundaries never split ties
//! inconsistently, lose records, or duplicate them.

use std::collections::HashSet;
use std::sync::Arc;

use logdeck::model::{LogRecord, LogStatus};
use logdeck::query::{QueryEngine, QueryResult, QuerySpec, RawQuery};
use logdeck::store::MemoryLogStore;

// =============================================================================
// Test Utilities
// =============================================================================

/// Records with deliberately heavy date collisions (three distinct
/// dates over twenty records), inserted out of id order.
fn tie_heavy_records() -> Vec<LogRecord> {
    let dates = ["2024-03-01", "2024-01-15", "2024-02-10", "2024-01-15"];
    let mut records: Vec<LogRecord> = (1..=20)
        .map(|id| {
            LogRecord::new(
                id,
                "",
                format!("host{:02}.example", 21 - id),
                LogStatus::Added,
                "batch import",
                dates[(id as usize) % dates.len()],
            )
        })
        .collect();
    records.reverse();
    records
}

fn date_asc_query(skip: usize, take: usize) -> RawQuery {
    RawQuery {
        statuses: Some("ADDED".into()),
        order_by: Some("standardDate".into()),
        order_direction: Some("asc".into()),
        skip: Some(skip.to_string()),
        take: Some(take.to_string()),
        ..RawQuery::default()
    }
}

async fn execute(engine: &QueryEngine, raw: RawQuery) -> QueryResult {
    let spec = QuerySpec::parse(&raw).expect("spec must parse");
    engine.execute(&spec).await.expect("query must succeed")
}

fn engine_over(records: Vec<LogRecord>) -> QueryEngine {
    QueryEngine::new(Arc::new(MemoryLogStore::with_records(records)))
}

/// Walks pages of `take` until the sequence is exhausted.
async fn collect_pages(engine: &QueryEngine, take: usize, raw: impl Fn(usize) -> RawQuery) -> Vec<LogRecord> {
    let mut all = Vec::new();
    let mut offset = 0;
    loop {
        let page = execute(engine, raw(offset)).await;
        if page.logs.is_empty() {
            break;
        }
        assert!(page.len() <= take);
        all.extend(page.logs);
        offset += take;
    }
    all
}

// =============================================================================
// Ordering Across Page Boundaries
// =============================================================================

/// Ascending date order holds across the whole paged sequence, with
/// equal dates resolved by ascending id even mid-boundary.
#[tokio::test]
async fn test_date_order_holds_across_page_boundaries() {
    let engine = engine_over(tie_heavy_records());
    let all = collect_pages(&engine, 3, |offset| date_asc_query(offset, 3)).await;

    assert_eq!(all.len(), 20);
    for pair in all.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.standard_date <= b.standard_date,
            "date order broken between {} and {}",
            a.id,
            b.id
        );
        if a.standard_date == b.standard_date {
            assert!(a.id < b.id, "tie not broken by id: {} vs {}", a.id, b.id);
        }
    }
}

/// Page concatenation reproduces the one-shot full fetch exactly, with
/// no duplicate or missing ids.
#[tokio::test]
async fn test_page_concatenation_reconstructs_full_sequence() {
    let engine = engine_over(tie_heavy_records());

    let paged = collect_pages(&engine, 7, |offset| date_asc_query(offset, 7)).await;
    let full = execute(&engine, date_asc_query(0, 100)).await;

    let paged_ids: Vec<_> = paged.iter().map(|r| r.id).collect();
    let full_ids: Vec<_> = full.logs.iter().map(|r| r.id).collect();
    assert_eq!(paged_ids, full_ids);

    let unique: HashSet<_> = paged_ids.iter().collect();
    assert_eq!(unique.len(), paged_ids.len(), "duplicate ids across pages");
    assert_eq!(paged_ids.len(), full.total);
}

/// Descending primary key still breaks ties by ascending id, so a
/// reversed walk is deterministic too.
#[tokio::test]
async fn test_desc_sort_pages_deterministically() {
    let engine = engine_over(tie_heavy_records());
    let raw = |offset: usize| RawQuery {
        order_direction: Some("desc".into()),
        ..date_asc_query(offset, 4)
    };

    let first = collect_pages(&engine, 4, raw).await;
    let second = collect_pages(&engine, 4, raw).await;

    let first_ids: Vec<_> = first.iter().map(|r| r.id).collect();
    let second_ids: Vec<_> = second.iter().map(|r| r.id).collect();
    assert_eq!(first_ids, second_ids);

    for pair in first.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.standard_date >= b.standard_date);
        if a.standard_date == b.standard_date {
            assert!(a.id < b.id);
        }
    }
}

// =============================================================================
// Stability Under Writes
// =============================================================================

/// A record inserted between two walks must not reshuffle the relative
/// order of records that were already present.
#[tokio::test]
async fn test_insert_between_walks_preserves_existing_order() {
    let store = Arc::new(MemoryLogStore::with_records(tie_heavy_records()));
    let engine = QueryEngine::new(store.clone());

    let before = collect_pages(&engine, 5, |offset| date_asc_query(offset, 5)).await;

    store
        .insert(LogRecord::new(
            99,
            "",
            "late.example",
            LogStatus::Added,
            "straggler",
            "2024-01-15",
        ))
        .await;

    let after = collect_pages(&engine, 5, |offset| date_asc_query(offset, 5)).await;
    assert_eq!(after.len(), before.len() + 1);

    let surviving: Vec<_> = after.iter().map(|r| r.id).filter(|&id| id != 99).collect();
    let original: Vec<_> = before.iter().map(|r| r.id).collect();
    assert_eq!(surviving, original, "existing records reordered by an insert");
}

/// Natural (insertion) order pages deterministically when no sort is
/// requested.
#[tokio::test]
async fn test_unsorted_pages_follow_store_order() {
    let engine = engine_over(tie_heavy_records());
    let raw = |offset: usize| RawQuery {
        statuses: Some("ADDED".into()),
        skip: Some(offset.to_string()),
        take: Some("6".into()),
        ..RawQuery::default()
    };

    let paged = collect_pages(&engine, 6, raw).await;
    let insertion_ids: Vec<_> = tie_heavy_records().iter().map(|r| r.id).collect();
    let paged_ids: Vec<_> = paged.iter().map(|r| r.id).collect();
    assert_eq!(paged_ids, insertion_ids);
}
