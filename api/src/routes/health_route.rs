//! GET /health — chat-provider health snapshot.

use std::sync::Arc;

use axum::{Json, extract::State};

use llm_gateway::HealthStatus;

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

/// Handler: GET /health
///
/// Probes the configured chat provider. Always answers 200 with the
/// snapshot; `ok=false` inside the payload signals an unhealthy backend.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthStatus>> {
    let status = state.health.check(state.llm.config()).await;
    Json(ApiResponse::success(status))
}
