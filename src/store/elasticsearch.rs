use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::LogStore;
use crate::error::{LogQueryError, Result};
use crate::query::SearchQuery;
use crate::types::{Hit, LogDocument};

pub const DEFAULT_NODE: &str = "http://localhost:9200";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for an Elasticsearch-compatible node.
pub struct ElasticsearchStore {
    base_url: String,
    http_client: reqwest::Client,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Option<HitsEnvelope>,
}

#[derive(Debug, Default, Deserialize)]
struct HitsEnvelope {
    #[serde(default)]
    hits: Option<Vec<Hit>>,
}

impl SearchResponse {
    /// A missing or null `hits` at either level reads as no matches.
    fn into_hits(self) -> Vec<Hit> {
        self.hits.and_then(|h| h.hits).unwrap_or_default()
    }
}

impl ElasticsearchStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LogQueryError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(LogQueryError::StoreRejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl LogStore for ElasticsearchStore {
    async fn index(&self, collection: &str, document: &LogDocument) -> Result<()> {
        let url = format!("{}/{}/_doc", self.base_url, collection);

        let response = self.http_client.post(&url).json(document).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn search(&self, collection: &str, query: &SearchQuery) -> Result<Vec<Hit>> {
        let url = format!("{}/{}/_search", self.base_url, collection);

        let response = self
            .http_client
            .post(&url)
            .json(&query.to_body())
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let body: SearchResponse = response.json().await?;
        Ok(body.into_hits())
    }

    async fn ping(&self) -> Result<()> {
        let url = format!("{}/", self.base_url);
        let response = self.http_client.get(&url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
