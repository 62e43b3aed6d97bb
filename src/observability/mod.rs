//! Observability
//!
//! Structured logging only: synchronous JSON lines with deterministic
//! key ordering. Observability is read-only — it never affects request
//! processing, and a failed write is dropped rather than surfaced.
//!
//! Events emitted by the system:
//! - `CONFIG_LOADED`, `STORE_OPENED`, `SERVER_START` (lifecycle)
//! - `QUERY_EXECUTED`, `QUERY_REJECTED` (per request)
//! - `STORE_ERROR` (adapter failure)

mod logger;

pub use logger::{Logger, Severity};
