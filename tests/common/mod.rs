use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use logquery::{Hit, LogDocument, LogQueryError, LogStore, SearchQuery};
use logquery_http::handlers::AppState;
use logquery_http::{build_router, ServerConfig};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// In-process store that records every call and replays canned hits.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingStore {
    pub indexed: Mutex<Vec<(String, LogDocument)>>,
    pub searches: Mutex<Vec<(String, SearchQuery)>>,
    pub hits: Vec<Hit>,
    pub fail_with: Option<LogQueryError>,
}

#[allow(dead_code)]
impl RecordingStore {
    pub fn with_hits(hits: Vec<Hit>) -> Self {
        Self {
            hits,
            ..Default::default()
        }
    }

    pub fn failing(err: LogQueryError) -> Self {
        Self {
            fail_with: Some(err),
            ..Default::default()
        }
    }

    pub fn index_calls(&self) -> Vec<(String, LogDocument)> {
        self.indexed.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<(String, SearchQuery)> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogStore for RecordingStore {
    async fn index(&self, collection: &str, document: &LogDocument) -> logquery::Result<()> {
        self.indexed
            .lock()
            .unwrap()
            .push((collection.to_string(), document.clone()));
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    async fn search(&self, collection: &str, query: &SearchQuery) -> logquery::Result<Vec<Hit>> {
        self.searches
            .lock()
            .unwrap()
            .push((collection.to_string(), query.clone()));
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(self.hits.clone()),
        }
    }

    async fn ping(&self) -> logquery::Result<()> {
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[allow(dead_code)]
pub fn router_with(store: Arc<dyn LogStore>) -> Router {
    build_router(Arc::new(AppState::new(store)), &ServerConfig::default())
}

#[allow(dead_code)]
pub fn hit(id: &str, source: serde_json::Value) -> Hit {
    serde_json::from_value(serde_json::json!({
        "_index": "logs",
        "_id": id,
        "_score": 1.0,
        "_source": source,
    }))
    .unwrap()
}

/// POST a JSON body and return status plus parsed JSON response.
#[allow(dead_code)]
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}
