//! HTTP surface
//!
//! A thin axum layer over the query engine. All decision logic lives in
//! `query`; this module only deserializes the raw query string, maps
//! errors to statuses, and applies CORS.

mod config;
mod errors;
mod routes;

pub use config::ServerConfig;
pub use errors::{ApiError, ErrorBody};
pub use routes::{router, serve};
