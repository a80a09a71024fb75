use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Instant;

use logquery::error::LogQueryError;
use logquery::query::{translate_filters, translate_global, SearchQuery};
use logquery::LOGS_COLLECTION;

use super::AppState;
use crate::dto::{GlobalSearchRequest, SearchRequest, SearchResponse};

async fn run_query(
    state: &AppState,
    query: &SearchQuery,
) -> Result<Json<SearchResponse>, LogQueryError> {
    let start = Instant::now();
    let logs = state
        .store
        .search(LOGS_COLLECTION, query)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error searching logs");
            e
        })?;

    tracing::debug!(
        hits = logs.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Search complete"
    );
    Ok(Json(SearchResponse { logs }))
}

/// Structured search: all non-empty filters must match
#[utoipa::path(
    post,
    path = "/search",
    tag = "search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching logs", body = SearchResponse),
        (status = 400, description = "Malformed filter"),
        (status = 500, description = "Log store failure")
    )
)]
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, LogQueryError> {
    // `req.query` belongs to global search and is not folded in here.
    let query = translate_filters(&req.filters).map_err(|e| {
        tracing::warn!(error = %e, filters = ?req.filters, "Rejected search filters");
        e
    })?;
    run_query(&state, &query).await
}

/// Global search: free text across all fields
#[utoipa::path(
    post,
    path = "/globalSearch",
    tag = "search",
    request_body = GlobalSearchRequest,
    responses(
        (status = 200, description = "Matching logs, empty for an empty query", body = SearchResponse),
        (status = 500, description = "Log store failure")
    )
)]
pub async fn global_search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GlobalSearchRequest>,
) -> Result<Json<SearchResponse>, LogQueryError> {
    match translate_global(&req.query) {
        Some(query) => run_query(&state, &query).await,
        None => Ok(Json(SearchResponse::default())),
    }
}
