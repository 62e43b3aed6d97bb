//! HTTP routes
//!
//! - `GET /logs` — query parameters through the Spec Parser, then the
//!   engine; responds `{"logs": [...], "total": n}`
//! - `GET /health` — liveness probe

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::query::{QueryEngine, QueryResult, QuerySpec, RawQuery};

use super::config::ServerConfig;
use super::errors::ApiError;

/// Builds the application router.
pub fn router(engine: QueryEngine, config: &ServerConfig) -> Router {
    Router::new()
        .route("/logs", get(list_logs))
        .route("/health", get(health))
        .layer(cors_layer(&config.cors_origins))
        .with_state(engine)
}

/// Binds the configured address and serves until shutdown.
pub async fn serve(config: &ServerConfig, engine: QueryEngine) -> Result<(), std::io::Error> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;

    Logger::info("SERVER_START", &[("addr", &addr)]);
    axum::serve(listener, router(engine, config)).await
}

async fn list_logs(
    State(engine): State<QueryEngine>,
    Query(raw): Query<RawQuery>,
) -> Result<Json<QueryResult>, ApiError> {
    let spec = QuerySpec::parse(&raw)?;
    let result = engine.execute(&spec).await?;
    Ok(Json(result))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Permissive CORS when no origins are configured, an explicit
/// allow-list otherwise.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
