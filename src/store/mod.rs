//! The document store that holds and ranks log records.
//!
//! Handlers only see [`LogStore`]; one instance is built at startup and
//! shared across requests as `Arc<dyn LogStore>`.

use async_trait::async_trait;

use crate::error::Result;
use crate::query::SearchQuery;
use crate::types::{Hit, LogDocument};

pub mod elasticsearch;

pub use elasticsearch::ElasticsearchStore;

#[async_trait]
pub trait LogStore: Send + Sync {
    /// Append one document to `collection`.
    async fn index(&self, collection: &str, document: &LogDocument) -> Result<()>;

    /// Run `query` against `collection`, returning hits in store order.
    async fn search(&self, collection: &str, query: &SearchQuery) -> Result<Vec<Hit>>;

    /// Cheap reachability check.
    async fn ping(&self) -> Result<()>;
}
