use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use logquery::error::LogQueryError;
use logquery::{LogDocument, LOGS_COLLECTION};

use super::AppState;
use crate::dto::IngestResponse;

/// Ingest one log document
#[utoipa::path(
    post,
    path = "/logs",
    tag = "logs",
    request_body(content = serde_json::Value, description = "Arbitrary JSON log object, stored as-is"),
    responses(
        (status = 201, description = "Log ingested", body = IngestResponse),
        (status = 500, description = "Log store failure", body = IngestResponse)
    )
)]
pub async fn ingest_log(
    State(state): State<Arc<AppState>>,
    Json(document): Json<LogDocument>,
) -> Result<(StatusCode, Json<IngestResponse>), LogQueryError> {
    state
        .store
        .index(LOGS_COLLECTION, &document)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error ingesting log");
            e
        })?;

    Ok((
        StatusCode::CREATED,
        Json(IngestResponse {
            message: "Log ingested successfully".to_string(),
        }),
    ))
}
