use axum::{extract::State, Json};
use std::sync::Arc;

use super::AppState;
use crate::dto::HealthResponse;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is up; `store` reports log store reachability", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = match state.store.ping().await {
        Ok(()) => "up",
        Err(e) => {
            tracing::warn!(error = %e, "Log store ping failed");
            "down"
        }
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        store: store.to_string(),
    })
}
