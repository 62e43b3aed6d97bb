//! Query engine
//!
//! Turns raw, loosely-typed request parameters into a deterministic,
//! filtered, sorted, paginated result set plus an accurate match count.
//!
//! # Pipeline (strict order per request)
//!
//! 1. Spec parsing: raw parameters → validated [`QuerySpec`]
//! 2. Predicate composition: [`LogFilter`] (search AND status)
//! 3. Ordering: [`SortSpec`] with ascending-id tie-break
//! 4. Windowing: [`PageWindow`] plus the filter-wide total
//!
//! No state is retained across requests; repeated execution of an
//! identical spec over identical data yields identical pages.

mod engine;
mod errors;
mod filters;
mod paginator;
mod result;
mod sorter;
mod spec;

pub use engine::QueryEngine;
pub use errors::{EngineResult, QueryError};
pub use filters::LogFilter;
pub use paginator::{PageWindow, DEFAULT_LIMIT};
pub use result::QueryResult;
pub use sorter::{SortDirection, SortField, SortSpec};
pub use spec::{QuerySpec, RawQuery};
