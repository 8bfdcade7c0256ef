use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

/// Health check endpoint
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let db_result = state.movies.ping().await;

    if let Err(e) = &db_result {
        tracing::warn!(error = %e, "Database health check failed");
    }

    let (status, database, status_code) = match db_result {
        Ok(()) => ("healthy", "ok", StatusCode::OK),
        Err(_) => ("unhealthy", "error", StatusCode::SERVICE_UNAVAILABLE),
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database.to_string(),
        }),
    )
}
