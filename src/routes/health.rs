use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceHealth,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    pub evaluator: String,
    pub evaluator_mode: String,
    pub active_sessions: usize,
}

/// Health check endpoint - public
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let evaluator = state.recalculator.evaluator();
    let evaluator_ok = evaluator.health_check().await.is_ok();

    // The estimate endpoint itself never depends on the evaluator
    let status = if evaluator_ok { "healthy" } else { "degraded" };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            services: ServiceHealth {
                evaluator: if evaluator_ok { "ok" } else { "error" }.to_string(),
                evaluator_mode: evaluator.mode().to_string(),
                active_sessions: state.sessions.len(),
            },
        }),
    )
}
