use logquery::{Filter, Hit};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /search`. Only `filters` is read.
#[derive(Debug, Default, Deserialize, Serialize, Clone, ToSchema)]
pub struct SearchRequest {
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub query: String,
}

/// Body of `POST /globalSearch`. Only `query` is read; `filters` is accepted
/// in any shape and left untouched.
#[derive(Debug, Default, Deserialize, Serialize, Clone, ToSchema)]
pub struct GlobalSearchRequest {
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub filters: serde_json::Value,
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct SearchResponse {
    /// Raw hits, each carrying `_id` and `_source` as reported by the store.
    #[schema(value_type = Vec<Object>)]
    pub logs: Vec<Hit>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IngestResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
}
